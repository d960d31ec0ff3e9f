//! Phones API.

use serde_json::Value;

use crate::client::AdminClient;
use crate::error::Result;
use crate::operations::{ADD_PHONE, DELETE_PHONE, GET_PHONE, GET_PHONES, SEND_SMS_ACTIVATION};
use crate::types::{NewPhone, PhoneLookup, SmsActivation};

/// Phones API client.
pub struct PhonesApi {
    client: AdminClient,
}

impl PhonesApi {
    pub(crate) fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// List all phones.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(&GET_PHONES, &[], &()).await
    }

    /// Get a phone by ID.
    pub async fn get(&self, phone_id: &str) -> Result<Value> {
        self.client.call(&GET_PHONE, &[phone_id], &()).await
    }

    /// Find phones by number and, optionally, extension.
    pub async fn find_by_number(&self, number: &str, extension: Option<&str>) -> Result<Value> {
        self.client
            .call(&GET_PHONES, &[], &PhoneLookup { number, extension })
            .await
    }

    /// Create a phone.
    pub async fn add(&self, phone: NewPhone) -> Result<Value> {
        self.client.call(&ADD_PHONE, &[], &phone).await
    }

    /// Delete a phone. Deleting an already deleted phone succeeds.
    pub async fn delete(&self, phone_id: &str) -> Result<()> {
        self.client.call_unit(&DELETE_PHONE, &[phone_id], &()).await
    }

    /// Generate a Duo Mobile activation code and send it by SMS.
    pub async fn send_sms_activation(
        &self,
        phone_id: &str,
        options: SmsActivation,
    ) -> Result<Value> {
        self.client
            .call(&SEND_SMS_ACTIVATION, &[phone_id], &options)
            .await
    }
}
