use serde_json::{Map, Value};
use shared_types::{AppError, CaseData, CaseDetails};

use crate::error_convert::SerdeErrorExt;

/// Metadata copied from the case envelope into `CaseData`; never sent back
/// as case data.
const METADATA_FIELDS: &[&str] = &["ccdCaseReference", "ccdState"];

/// Structural mapping between platform snapshots and `CaseData`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseDetailsConverter;

impl CaseDetailsConverter {
    pub fn new() -> Self {
        Self
    }

    /// Build `CaseData` from a snapshot, taking the reference and state from
    /// the envelope rather than from the data map.
    pub fn to_case_data(&self, details: &CaseDetails) -> Result<CaseData, AppError> {
        let mut map = details.case_data.clone();
        map.insert("ccdCaseReference".to_string(), Value::from(details.id.0));
        match &details.state {
            Some(state) => map.insert("ccdState".to_string(), Value::String(state.clone())),
            None => map.remove("ccdState"),
        };

        let null_keys: Vec<String> = map
            .iter()
            .filter(|(_, value)| value.is_null())
            .map(|(key, _)| key.clone())
            .collect();

        let mut case_data: CaseData =
            serde_json::from_value(Value::Object(map)).map_err(SerdeErrorExt::into_app_error)?;
        // Untyped nulls already survive in `extra`.
        case_data.null_fields = null_keys
            .into_iter()
            .filter(|key| !case_data.extra.contains_key(key))
            .collect();
        Ok(case_data)
    }

    /// Flatten `CaseData` back to the map the platform accepts as event data.
    pub fn to_data_map(&self, case_data: &CaseData) -> Result<Map<String, Value>, AppError> {
        match serde_json::to_value(case_data).map_err(SerdeErrorExt::into_app_error)? {
            Value::Object(mut map) => {
                for field in &case_data.null_fields {
                    map.entry(field.clone()).or_insert(Value::Null);
                }
                for field in METADATA_FIELDS {
                    map.remove(*field);
                }
                Ok(map)
            }
            other => Err(AppError::internal(format!(
                "Case data serialized to a non-object value: {}",
                other
            ))),
        }
    }
}
