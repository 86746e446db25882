use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::de::{Error as DeError, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Stored as a native BSON date
    chrono_datetime_as_bson_datetime::serialize(value, serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DateTimeFallbackVisitor)
}

struct DateTimeFallbackVisitor;

impl<'de> Visitor<'de> for DateTimeFallbackVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ISO8601 string OR a BSON date sub-document")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        // Documents written by older clients hold ISO8601 strings
        value.parse::<DateTime<Utc>>().map_err(DeError::custom)
    }

    fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
    where
        M: serde::de::MapAccess<'de>,
    {
        chrono_datetime_as_bson_datetime::deserialize(serde::de::value::MapAccessDeserializer::new(
            map,
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use crate::Channel;

    #[test]
    fn stored_as_bson_date() {
        let channel = Channel {
            name: "chA".to_string(),
            available: false,
            unavailable: true,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let document = bson::to_document(&channel).unwrap();
        assert!(matches!(
            document.get("createdAt"),
            Some(bson::Bson::DateTime(_))
        ));

        let decoded: Channel = bson::from_document(document).unwrap();
        assert_eq!(decoded, channel);
    }

    #[test]
    fn accepts_iso_strings() {
        let document = bson::doc! {
            "name": "chA",
            "createdAt": "2024-01-01T00:00:00Z"
        };

        let channel: Channel = bson::from_document(document).unwrap();
        assert_eq!(
            channel.created_at,
            "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert!(!channel.available);
    }
}
