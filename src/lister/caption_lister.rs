// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::ListerConfig;
use crate::common::Error;
use crate::log::StringLogger;
use crate::videos::{CaptionApiFactory, CaptionTrackId};

/// Logged after a failure to point at the usual culprits.
pub const FAILURE_HINT: &str = "The scopes may be wrong, the video ID may be invalid, \
     or the video may have no captions available.";

/// Lists the caption track IDs of one video and logs each of them.
pub struct CaptionLister {
    config: ListerConfig,
}

impl CaptionLister {
    /// Create a lister for `config`.
    pub fn new(config: ListerConfig) -> Self {
        Self { config }
    }

    /// Check the credential file, connect through `factory`, list the caption
    /// track IDs and log one record per ID at the configured severity.
    ///
    /// A missing credential file is reported on standard output and the factory
    /// is never called.  Any other failure is logged as an exception followed by
    /// a hint, then returned.
    pub async fn run(
        &self,
        factory: &dyn CaptionApiFactory,
        logger: &StringLogger,
    ) -> Result<Vec<CaptionTrackId>, Error> {
        let ListerConfig {
            credential_path,
            severity,
            video_id,
            ..
        } = &self.config;

        if !credential_path.exists() {
            println!("{}: credential file not found.", credential_path.display());
            println!("Download an OAuth2 client secret from the Google Cloud console and save it there.");
            return Err(Error::Precondition(format!(
                "{}: credential file not found",
                credential_path.display()
            )));
        }

        match self.list(factory).await {
            Ok(ids) => {
                for id in &ids {
                    logger.log(*severity, id.to_string());
                }
                Ok(ids)
            }
            Err(e) => {
                logger.exception(format!("cannot list captions of {video_id}"), &e);
                logger.info(FAILURE_HINT.to_string());
                Err(e)
            }
        }
    }

    async fn list(&self, factory: &dyn CaptionApiFactory) -> Result<Vec<CaptionTrackId>, Error> {
        let ListerConfig {
            credential_path,
            scopes,
            video_id,
            ..
        } = &self.config;
        let api = factory.connect(credential_path, scopes).await?;
        api.captions().list_track_ids(video_id).await
    }
}
