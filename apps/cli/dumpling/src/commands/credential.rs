use crate::error::DumplingError;

use dumpling_core::credential::DumplingAiCredential;
use dumpling_core::error::CoreError;
use dumpling_core::{DumplingClient, DumplingConfig};

use log::{error, info};

/// Send the credential test request.
///
/// # Errors
///
/// [`DumplingError::Credential`] when the API answers 401 or 403,
/// [`DumplingError::Core`] for any other failure.
pub async fn test_credential(
    config: &DumplingConfig,
    credential: &DumplingAiCredential,
) -> Result<(), DumplingError> {
    let client = DumplingClient::new(config, credential).map_err(CoreError::from)?;

    info!("Testing credential against {}", client.base_url());

    client.test_credential().await.map_err(|e| {
        error!("Credential test failed: {}", e);
        CoreError::from(e)
    })?;

    info!("Credential accepted");
    Ok(())
}
