use crate::error::ApiError;
use async_trait::async_trait;
use configuration::settings::Source;
use core_types::ClientRecord;

pub mod error;

/// The generic, abstract interface for a CRM data provider.
/// This trait is the contract that the dashboard uses, allowing the
/// underlying implementation (live HTTP or mock) to be swapped out.
#[async_trait]
pub trait ClientDataSource: Send + Sync {
    /// Fetches the complete client dataset, in provider order.
    ///
    /// The dataset is fetched exactly once per dashboard run and treated as
    /// immutable afterwards; there is no pagination, retry, or incremental
    /// refresh on this boundary.
    async fn fetch_clients(&self) -> Result<Vec<ClientRecord>, ApiError>;
}

/// A concrete implementation of the `ClientDataSource` over plain HTTP.
///
/// Issues a single unauthenticated GET against the configured endpoint and
/// expects a JSON array of client records.
#[derive(Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDataSource {
    pub fn new(source: &Source) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: source.endpoint.clone(),
        }
    }
}

#[async_trait]
impl ClientDataSource for HttpDataSource {
    async fn fetch_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        tracing::info!(endpoint = %self.endpoint, "Fetching CRM dataset.");

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let records = serde_json::from_str::<Vec<ClientRecord>>(&text)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        tracing::info!(count = records.len(), "Fetched CRM dataset.");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ClientStatus;
    use rust_decimal::Decimal;

    /// An in-memory stand-in for the HTTP source, exercising the trait the
    /// way the dashboard consumes it.
    struct StaticDataSource {
        payload: &'static str,
    }

    #[async_trait]
    impl ClientDataSource for StaticDataSource {
        async fn fetch_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
            serde_json::from_str(self.payload).map_err(|e| ApiError::Deserialization(e.to_string()))
        }
    }

    #[tokio::test]
    async fn parses_a_well_formed_dataset() {
        let source: Box<dyn ClientDataSource> = Box::new(StaticDataSource {
            payload: r#"[
                {"id": 1, "name": "Acme", "email": "a@acme.example",
                 "opportunityValue": 500, "status": "Active"},
                {"id": 2, "name": "Globex", "email": "g@globex.example",
                 "opportunityValue": 2000, "status": "Inactive"}
            ]"#,
        });

        let records = source.fetch_clients().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].opportunity_value, Decimal::from(500));
        assert_eq!(records[1].status, ClientStatus::Inactive);
    }

    #[tokio::test]
    async fn preserves_provider_order() {
        let source = StaticDataSource {
            payload: r#"[
                {"id": 9, "name": "C", "email": "c@example.com",
                 "opportunityValue": 1, "status": "Active"},
                {"id": 3, "name": "A", "email": "a@example.com",
                 "opportunityValue": 2, "status": "Active"},
                {"id": 7, "name": "B", "email": "b@example.com",
                 "opportunityValue": 3, "status": "Active"}
            ]"#,
        };

        let ids: Vec<u64> = source
            .fetch_clients()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![9, 3, 7]);
    }

    #[tokio::test]
    async fn malformed_body_maps_to_a_deserialization_error() {
        let source = StaticDataSource {
            payload: r#"{"not": "an array"}"#,
        };

        let err = source.fetch_clients().await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[tokio::test]
    async fn wrong_field_types_are_rejected_at_the_boundary() {
        // `opportunityValue` as a non-numeric string must not leak into the
        // aggregates as a silent zero.
        let source = StaticDataSource {
            payload: r#"[
                {"id": 1, "name": "Acme", "email": "a@acme.example",
                 "opportunityValue": "lots", "status": "Active"}
            ]"#,
        };

        let err = source.fetch_clients().await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
