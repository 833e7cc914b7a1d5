use super::{DineroClient, describe_failure};
use crate::{
    config::Credentials,
    error::{Error, Result},
    types::{
        AccessToken, BookVoucherRequest, CreatedVoucherResponse, ManualVoucherRequest,
        VoucherRecord,
    },
};

/// Creates a manual voucher in the configured organization.
///
/// The response must carry a guid and a timestamp; both are needed to book
/// the voucher afterwards.
pub async fn create_manual_voucher(
    client: &DineroClient,
    credentials: &Credentials,
    token: &AccessToken,
    voucher: &ManualVoucherRequest,
) -> Result<VoucherRecord> {
    let url = format!(
        "{api}/{org}/vouchers/manuel",
        api = client.api_url,
        org = credentials.organization_id
    );

    let request = client.http.post(&url).json(voucher);
    let response = client
        .authorized(request, credentials, token)
        .send()
        .await
        .map_err(|e| Error::Creation(format!("Voucher request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(Error::Creation(describe_failure(response).await));
    }

    let created: CreatedVoucherResponse = response
        .json()
        .await
        .map_err(|e| Error::Creation(format!("Unexpected voucher response: {}", e)))?;

    into_record(created)
}

pub fn into_record(created: CreatedVoucherResponse) -> Result<VoucherRecord> {
    let guid = match created.guid {
        Some(guid) if !guid.trim().is_empty() => guid,
        _ => {
            return Err(Error::Creation(
                "Response did not include a voucher GUID to book".to_string(),
            ));
        }
    };

    let timestamp = match created.timestamp {
        Some(timestamp) if !timestamp.trim().is_empty() => timestamp,
        _ => {
            return Err(Error::Creation(format!(
                "Response for voucher {} did not include the timestamp required to book it",
                guid
            )));
        }
    };

    Ok(VoucherRecord {
        voucher_number: created.voucher_number,
        guid,
        timestamp,
    })
}

/// Books a previously created manual voucher. An empty success body is fine.
pub async fn book_manual_voucher(
    client: &DineroClient,
    credentials: &Credentials,
    token: &AccessToken,
    voucher: &VoucherRecord,
) -> Result<()> {
    let booking_error = |reason: String| Error::Booking {
        voucher_number: voucher.voucher_number,
        guid: voucher.guid.clone(),
        reason,
    };

    let url = format!(
        "{api}/{org}/vouchers/manuel/{guid}/book",
        api = client.api_url,
        org = credentials.organization_id,
        guid = voucher.guid
    );

    let body = BookVoucherRequest {
        timestamp: voucher.timestamp.clone(),
    };
    let request = client.http.post(&url).json(&body);
    let response = client
        .authorized(request, credentials, token)
        .send()
        .await
        .map_err(|e| booking_error(format!("Booking request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(booking_error(describe_failure(response).await));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_requires_guid() {
        let created = CreatedVoucherResponse {
            guid: None,
            voucher_number: Some(3),
            timestamp: Some("0000000000001".to_string()),
        };
        assert!(matches!(into_record(created), Err(Error::Creation(_))));
    }

    #[test]
    fn record_requires_timestamp() {
        let created = CreatedVoucherResponse {
            guid: Some("g-1".to_string()),
            voucher_number: Some(3),
            timestamp: Some("  ".to_string()),
        };
        assert!(matches!(into_record(created), Err(Error::Creation(_))));
    }

    #[test]
    fn record_parsed_from_pascal_case_body() {
        let created: CreatedVoucherResponse = serde_json::from_str(
            r#"{"Guid":"9c7b","VoucherNumber":17,"TimeStamp":"00000000001A2B3C"}"#,
        )
        .unwrap();

        let record = into_record(created).unwrap();
        assert_eq!(record.guid, "9c7b");
        assert_eq!(record.voucher_number, Some(17));
        assert_eq!(record.timestamp, "00000000001A2B3C");
    }
}
