// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use caption_lister::{
    CaptionLister, CubConfig, Error, ListerConfig, Severity, StringLogger, VideoResourceId,
    YoutubeConnector,
};
use std::path::PathBuf;
use structopt::StructOpt;

/// Looked up in the home directory, then the working directory, unless `--config` is given.
const DEFAULT_CONFIG_FILE: &str = "caption_lister.toml";

#[derive(StructOpt)]
#[structopt(about = "List the caption track IDs of a YouTube video")]
struct Options {
    /// TOML file with a [captions] section (default: caption_lister.toml, if present).
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Google OAuth2 client secret file.
    #[structopt(long, parse(from_os_str))]
    credentials: Option<PathBuf>,

    /// Video whose caption tracks are listed.
    #[structopt(short, long)]
    video_id: Option<String>,

    /// OAuth2 scope to request (repeatable).
    #[structopt(long = "scope")]
    scopes: Vec<String>,

    /// Severity at which caption track IDs are logged.
    #[structopt(long)]
    severity: Option<Severity>,

    /// File remembering the OAuth2 token between runs.
    #[structopt(long, parse(from_os_str))]
    token_cache: Option<PathBuf>,

    /// Echo every log line to standard output as it happens.
    #[structopt(short, long)]
    debug: bool,
}

impl Options {
    fn lister_config(&self) -> Result<ListerConfig, Error> {
        let builder = CubConfig::builder().debug(self.debug);
        let cub_config = match &self.config {
            Some(path) => builder.toml_path(path).build()?,
            None => match builder.toml_file(DEFAULT_CONFIG_FILE).build() {
                Ok(cub_config) => cub_config,
                Err(_) => CubConfig::builder().debug(self.debug).empty().build()?,
            },
        };
        let mut config = ListerConfig::new(&cub_config)?;
        if let Some(path) = &self.credentials {
            config = config.credential_path(path.clone());
        }
        if let Some(video_id) = &self.video_id {
            config = config.video_id(VideoResourceId(video_id.clone()));
        }
        if !self.scopes.is_empty() {
            config = config.scopes(self.scopes.clone());
        }
        if let Some(severity) = self.severity {
            config = config.severity(severity);
        }
        if self.token_cache.is_some() {
            config = config.token_cache(self.token_cache.clone());
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let options = Options::from_args();
    let config = match options.lister_config() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    let echo_min = config.severity.min(Severity::Info);
    let logger = StringLogger::new(options.debug);
    let connector = YoutubeConnector::new(logger.clone())
        .timeout(config.timeout())
        .token_cache(config.token_cache.clone());
    let lister = CaptionLister::new(config);
    let result = lister.run(&connector, &logger).await;
    if !options.debug {
        for record in logger.records() {
            if record.severity >= echo_min {
                println!("{record}");
            }
        }
    }
    // Failures were already logged; the exit status stays zero.
    if let Err(e) = result {
        println!("caption listing ended with {}", e.kind());
    }
}
