use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use moodmirror::analysis::KeywordAnalyzer;
use moodmirror::check::{CheckReport, run_check};
use moodmirror::core::config::{self, CliOverrides, MoodMirrorConfig, ResolvedConfig};
use moodmirror::core::state::Session;
use moodmirror::tui;
use log::{LevelFilter, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(
    name = "moodmirror",
    about = "Reflect, understand, and care for your feelings"
)]
struct Args {
    /// Simulated analysis latency in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Read config from this file instead of ~/.moodmirror/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Check in once without the TUI and print the result
    #[arg(long, value_name = "TEXT")]
    check: Option<String>,

    /// With --check, print the result as JSON
    #[arg(long, requires = "check")]
    json: bool,
}

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let resolved = startup(&args, Path::new("moodmirror.log"));

    if let Some(text) = args.check.as_deref() {
        return match check_output(text, args.json, &resolved).await? {
            Some(output) => {
                print!("{}", output);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("moodmirror: nothing to check, input is blank");
                Ok(ExitCode::FAILURE)
            }
        };
    }

    tui::run(resolved)?;
    Ok(ExitCode::SUCCESS)
}

/// Install the file logger, then load and resolve config so everything
/// logged along the way reaches the log file.
fn startup(args: &Args, log_path: &Path) -> ResolvedConfig {
    // Initialize file logger; the level is provisional until config is resolved
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(log_path) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(LevelFilter::Info);

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .unwrap_or_else(|e| {
        warn!("Using default config: {}", e);
        MoodMirrorConfig::default()
    });
    let cli = CliOverrides {
        delay_ms: args.delay_ms,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::set_max_level(resolved.log_level);

    info!(
        "Mood Mirror starting up (delay={}ms, history={} entries)",
        resolved.analysis_delay.as_millis(),
        resolved.history.len()
    );
    resolved
}

/// One headless check-in. `None` when the text is blank.
async fn check_output(
    text: &str,
    json: bool,
    resolved: &ResolvedConfig,
) -> io::Result<Option<String>> {
    let mut session = Session::new(resolved.history.clone());
    let analyzer = KeywordAnalyzer::new(resolved.analysis_delay);
    let Some(profile) = run_check(&mut session, &analyzer, text).await else {
        return Ok(None);
    };

    let report = CheckReport::new(text, profile);
    if json {
        let mut out = report.to_json().map_err(io::Error::other)?;
        out.push('\n');
        Ok(Some(out))
    } else {
        Ok(Some(report.to_plain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    fn quick_config() -> ResolvedConfig {
        ResolvedConfig {
            analysis_delay: Duration::ZERO,
            log_level: LevelFilter::Info,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_startup_logs_config_warnings() {
        let dir = std::env::temp_dir().join(format!("moodmirror-startup-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("config.toml");
        let log_path = dir.join("moodmirror.log");
        fs::write(
            &config_path,
            "[general]\nanalysis_delay_ms = 0\nlog_level = \"loud\"\n",
        )
        .unwrap();

        let args = Args {
            delay_ms: None,
            config: Some(config_path.clone()),
            check: None,
            json: false,
        };
        let resolved = startup(&args, &log_path);
        assert_eq!(resolved.analysis_delay, Duration::ZERO);

        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("Loaded config from"), "log was: {}", log);
        assert!(log.contains("Unknown log level"), "log was: {}", log);

        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_check_output_blank_is_none() {
        let output = check_output("  \n ", false, &quick_config()).await.unwrap();
        assert!(output.is_none());
    }

    #[tokio::test]
    async fn test_check_output_plain_and_json() {
        let plain = check_output("so stressed", false, &quick_config())
            .await
            .unwrap()
            .unwrap();
        assert!(plain.contains("Detected Emotion: Stressed"));

        let json = check_output("so stressed", true, &quick_config())
            .await
            .unwrap()
            .unwrap();
        assert!(json.contains("\"key\": \"stressed\""));
        assert!(json.ends_with('\n'));
    }
}
