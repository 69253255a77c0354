use chrono::Local;
use tracing::{error, info};

use crate::config::settings::InvocationSettings;
use crate::domain::invocation::{InvocationEvent, InvocationResponse, SuccessBody};
use crate::domain::operation::Operation;
use crate::domain::page::format_timestamp;
use crate::error::Result;

use super::Collector;

impl Collector {
    /// Run one invocation stamped with the current local time.
    pub async fn handle(
        &self,
        event: &InvocationEvent,
        settings: &InvocationSettings,
    ) -> InvocationResponse {
        let timestamp = format_timestamp(&Local::now());
        self.handle_at(event, settings, &timestamp).await
    }

    /// Run one invocation and translate the outcome into a response envelope.
    pub async fn handle_at(
        &self,
        event: &InvocationEvent,
        settings: &InvocationSettings,
        timestamp: &str,
    ) -> InvocationResponse {
        match self.collect(event, settings, timestamp).await {
            Ok(body) => InvocationResponse::success(&body),
            Err(e) if e.is_domain() => {
                error!(error = %e, "Collector error");
                InvocationResponse::failure(e.to_string())
            }
            Err(e) => {
                error!(error = ?e, "Unexpected error");
                InvocationResponse::unexpected(&e)
            }
        }
    }

    async fn collect(
        &self,
        event: &InvocationEvent,
        settings: &InvocationSettings,
        timestamp: &str,
    ) -> Result<SuccessBody> {
        let max_pages = event.max_pages();
        if event.test_mode {
            info!("Running in TEST MODE - will only process 1 page per operation");
        }

        let settings = settings.resolve()?;

        info!("Retrieving credentials");
        let sale_credential = self.secrets.get_secret(&settings.sale_secret_id).await?;
        let rent_credential = self.secrets.get_secret(&settings.rent_secret_id).await?;

        info!("Processing sale listings");
        let sale_pages = self
            .process_operation(
                Operation::Sale,
                &sale_credential,
                &settings.bucket,
                timestamp,
                max_pages,
            )
            .await?;

        info!("Processing rent listings");
        let rent_pages = self
            .process_operation(
                Operation::Rent,
                &rent_credential,
                &settings.bucket,
                timestamp,
                max_pages,
            )
            .await?;

        let message = format!(
            "Successfully collected listings: {sale_pages} sale pages, {rent_pages} rent pages"
        );
        info!("{message}");

        Ok(SuccessBody {
            message,
            timestamp: timestamp.to_string(),
            sale_pages,
            rent_pages,
        })
    }
}
