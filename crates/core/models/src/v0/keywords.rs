use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "validator")]
use validator::{Validate, ValidationError};

/// Regex for channel names accepted by the merge flow
pub static RE_CHANNEL_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

/// Check whether the given string is a well-formed keyword id
///
/// Ids are ULIDs, this never touches storage.
pub fn is_valid_id(id: &str) -> bool {
    ulid::Ulid::from_string(id).is_ok()
}

auto_derived!(
    /// Keyword
    pub struct Keyword {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Username this keyword belongs to
        pub username: String,
        /// Channels, in the order they were supplied
        pub channels: Vec<Channel>,
        /// Number of channels as a decimal string
        pub channelcount: String,
    }

    /// Channel belonging to a keyword
    pub struct Channel {
        /// Channel name
        pub name: String,
        /// Whether the channel is available
        pub available: bool,
        /// Whether the channel is unavailable
        pub unavailable: bool,
        /// Time at which this channel was created
        #[cfg_attr(feature = "serde", serde(rename = "createdAt"))]
        pub created_at: DateTime<Utc>,
    }

    /// Channel information supplied by a client
    #[derive(Default)]
    pub struct DataChannel {
        /// Channel name
        #[cfg_attr(feature = "serde", serde(default))]
        pub name: String,
        /// Whether the channel is available
        #[cfg_attr(feature = "serde", serde(default))]
        pub available: bool,
        /// Whether the channel is unavailable
        #[cfg_attr(feature = "serde", serde(default))]
        pub unavailable: bool,
        /// Creation time, defaults to now
        #[cfg_attr(
            feature = "serde",
            serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")
        )]
        pub created_at: Option<DateTime<Utc>>,
    }

    /// New keyword information
    #[derive(Default)]
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateKeyword {
        /// Username to file this keyword under
        #[cfg_attr(feature = "serde", serde(default))]
        #[cfg_attr(
            feature = "validator",
            validate(length(min = 1, message = "Username and channels are required."))
        )]
        pub username: String,
        /// Channels to create the keyword with
        #[cfg_attr(feature = "serde", serde(default))]
        #[cfg_attr(
            feature = "validator",
            validate(
                length(min = 1, message = "Username and channels are required."),
                custom = "validate_channels"
            )
        )]
        pub channels: Vec<DataChannel>,
    }

    /// Replacement channel list for a keyword
    #[derive(Default)]
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataEditKeyword {
        /// Full replacement for the channel list
        #[cfg_attr(feature = "serde", serde(default))]
        #[cfg_attr(
            feature = "validator",
            validate(
                length(min = 1, message = "Channels are required."),
                custom = "validate_channels"
            )
        )]
        pub channels: Vec<DataChannel>,
    }

    /// Channel names to merge into the keyword for a username
    #[derive(Default)]
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataMergeKeyword {
        /// Username to merge into
        #[cfg_attr(feature = "serde", serde(default))]
        #[cfg_attr(
            feature = "validator",
            validate(length(min = 1, message = "Username and channel names are required."))
        )]
        pub username: String,
        /// Channel names, existing names are skipped
        #[cfg_attr(feature = "serde", serde(default))]
        #[cfg_attr(
            feature = "validator",
            validate(
                length(min = 1, message = "Username and channel names are required."),
                custom = "validate_channel_names"
            )
        )]
        pub channels: Vec<String>,
    }

    /// Page of keywords
    pub struct KeywordsPage {
        /// Keywords on this page
        pub keywords: Vec<Keyword>,
        /// Total number of pages for the current filter
        #[cfg_attr(feature = "serde", serde(rename = "totalPages"))]
        pub total_pages: u64,
    }

    /// Acknowledgement message
    pub struct Acknowledgement {
        /// Message
        pub message: String,
    }
);

/// Query parameters for listing keywords
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "utoipa", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Default)]
pub struct OptionsFetchKeywords {
    /// Page to fetch, starting at 1
    pub page: Option<u64>,
    /// Number of keywords per page
    pub limit: Option<u64>,
    /// Only include keywords for this username
    pub username: Option<String>,
}

/// Query parameters for deleting a keyword
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "utoipa", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Default)]
pub struct OptionsDeleteKeyword {
    /// Keyword id
    pub id: Option<String>,
}

impl OptionsFetchKeywords {
    /// Page number, anything below 1 is treated as the first page
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, falling back to the given default when missing or zero
    pub fn limit(&self, default: u64) -> u64 {
        match self.limit {
            Some(limit) if limit >= 1 => limit,
            _ => default.max(1),
        }
    }
}

impl KeywordsPage {
    /// Number of pages needed to show `count` keywords `limit` at a time
    pub fn pages_for(count: u64, limit: u64) -> u64 {
        count.div_ceil(limit.max(1))
    }
}

#[cfg(feature = "validator")]
#[allow(clippy::ptr_arg)]
fn validate_channels(channels: &Vec<DataChannel>) -> Result<(), ValidationError> {
    if channels.iter().any(|channel| channel.name.is_empty()) {
        let mut error = ValidationError::new("channel_name");
        error.message = Some("Each channel must have a valid name.".into());
        return Err(error);
    }

    Ok(())
}

#[cfg(feature = "validator")]
#[allow(clippy::ptr_arg)]
fn validate_channel_names(names: &Vec<String>) -> Result<(), ValidationError> {
    if !names.iter().all(|name| RE_CHANNEL_NAME.is_match(name)) {
        let mut error = ValidationError::new("channel_name");
        error.message =
            Some("Channel names must be alphanumeric (e.g., channel01, channel02).".into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_ulids() {
        assert!(is_valid_id(&ulid::Ulid::new().to_string()));
        assert!(is_valid_id("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
        assert!(!is_valid_id("not-an-id"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("507f1f77bcf86cd799439011"));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(KeywordsPage::pages_for(0, 15), 0);
        assert_eq!(KeywordsPage::pages_for(15, 15), 1);
        assert_eq!(KeywordsPage::pages_for(16, 15), 2);
        assert_eq!(KeywordsPage::pages_for(7, 2), 4);
    }

    #[test]
    fn paging_defaults() {
        let options = OptionsFetchKeywords::default();
        assert_eq!(options.page(), 1);
        assert_eq!(options.limit(15), 15);

        let options = OptionsFetchKeywords {
            page: Some(0),
            limit: Some(0),
            username: None,
        };
        assert_eq!(options.page(), 1);
        assert_eq!(options.limit(15), 15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn keyword_wire_format() {
        let keyword = Keyword {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
            username: "alice".to_string(),
            channels: vec![Channel {
                name: "chA".to_string(),
                available: true,
                unavailable: false,
                created_at: DateTime::from_timestamp(0, 0).unwrap(),
            }],
            channelcount: "1".to_string(),
        };

        let value = serde_json::to_value(&keyword).unwrap();
        assert_eq!(value["_id"], "01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert_eq!(value["channelcount"], "1");
        assert_eq!(value["channels"][0]["createdAt"], "1970-01-01T00:00:00Z");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn channel_flags_default_to_false() {
        let channel: DataChannel = serde_json::from_str(r#"{ "name": "chA" }"#).unwrap();
        assert!(!channel.available);
        assert!(!channel.unavailable);
        assert!(channel.created_at.is_none());
    }

    #[cfg(feature = "validator")]
    #[test]
    fn create_requires_username_and_named_channels() {
        let data = DataCreateKeyword {
            username: "alice".to_string(),
            channels: vec![DataChannel {
                name: "chA".to_string(),
                ..Default::default()
            }],
        };
        assert!(data.validate().is_ok());

        let missing_username = DataCreateKeyword {
            username: String::new(),
            ..data.clone()
        };
        assert!(missing_username.validate().is_err());

        let no_channels = DataCreateKeyword {
            channels: vec![],
            ..data.clone()
        };
        assert!(no_channels.validate().is_err());

        let unnamed = DataCreateKeyword {
            channels: vec![DataChannel::default()],
            ..data
        };
        let error = unnamed.validate().unwrap_err().to_string();
        assert!(error.contains("Each channel must have a valid name."));
    }

    #[cfg(feature = "validator")]
    #[test]
    fn merge_requires_alphanumeric_names() {
        let data = DataMergeKeyword {
            username: "alice".to_string(),
            channels: vec!["channel01".to_string(), "chB".to_string()],
        };
        assert!(data.validate().is_ok());

        let data = DataMergeKeyword {
            channels: vec!["channel 01".to_string()],
            ..data
        };
        assert!(data.validate().is_err());
    }
}
