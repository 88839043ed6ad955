use crate::core::{AvatarModel, AvatarSource, LookupOutcome, LookupRequest, RawResponse};
use crate::utils::error::{LookupError, Result};
use std::io::Write;

pub struct AvatarLookupClient<S: AvatarSource> {
    source: S,
}

impl<S: AvatarSource> AvatarLookupClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Performs the lookup and classifies the response.
    ///
    /// Transport failures become [`LookupOutcome::TransportFailure`]. A 200
    /// whose body is not `{"model_url": "..."}` is returned as
    /// [`LookupError::MalformedBody`] instead.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<LookupOutcome> {
        let url = request.target_url();

        let response = match self.source.fetch(&url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return Ok(LookupOutcome::TransportFailure {
                    message: e.to_string(),
                });
            }
        };

        classify(&request.player_id, response)
    }

    /// Runs [`lookup`](Self::lookup) and writes the report lines to `out`.
    pub async fn run<W: Write>(&self, request: &LookupRequest, out: &mut W) -> Result<LookupOutcome> {
        let outcome = self.lookup(request).await?;
        writeln!(out, "{}", outcome)?;
        out.flush()?;
        Ok(outcome)
    }
}

fn classify(player_id: &str, response: RawResponse) -> Result<LookupOutcome> {
    match response.status {
        200 => {
            let model: AvatarModel = serde_json::from_str(&response.body).map_err(|source| {
                LookupError::MalformedBody {
                    status: response.status,
                    source,
                }
            })?;
            Ok(LookupOutcome::Found {
                player_id: player_id.to_string(),
                model_url: model.model_url_text(),
            })
        }
        404 => Ok(LookupOutcome::NotFound {
            player_id: player_id.to_string(),
        }),
        status => Ok(LookupOutcome::UnexpectedStatus {
            status,
            body: response.body,
        }),
    }
}
