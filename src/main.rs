#![allow(dead_code)]

use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod components;
mod message;

use jot::api;
use jot::config;
use jot::core;
use jot::store;

use application::{Flags, Jot};
use config::{JotConfig, CONFIG_VERSION};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new("dev.jot.app", CONFIG_VERSION)
        .expect("Failed to create cosmic config");
    let config = JotConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Set up logging to the systemd user journal (`journalctl --user -t jot -f`).
    // Wrapper filters: jot crate at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                let target = metadata.target();
                if target.starts_with("jot") || target.starts_with("application") || target.starts_with("components") {
                    let max = if jot::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()
            .unwrap()
            .with_syslog_identifier("jot".to_string());

        jot::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).unwrap();
        // Global max must be Debug so jot debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(400.0).min_height(300.0));

    let flags = Flags { config };
    cosmic::app::run::<Jot>(settings, flags)?;

    Ok(())
}
