use chrono::{SubsecRound, Utc};
use keywords_models::v0::*;

impl From<crate::Keyword> for Keyword {
    fn from(value: crate::Keyword) -> Self {
        Keyword {
            id: value.id,
            username: value.username,
            channels: value.channels.into_iter().map(Into::into).collect(),
            channelcount: value.channelcount,
        }
    }
}

impl From<crate::Channel> for Channel {
    fn from(value: crate::Channel) -> Self {
        Channel {
            name: value.name,
            available: value.available,
            unavailable: value.unavailable,
            created_at: value.created_at,
        }
    }
}

impl From<DataChannel> for crate::Channel {
    fn from(value: DataChannel) -> Self {
        crate::Channel {
            name: value.name,
            available: value.available,
            unavailable: value.unavailable,
            created_at: value.created_at.unwrap_or_else(Utc::now).trunc_subsecs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use keywords_models::v0;

    #[test]
    fn data_channel_defaults_created_at() {
        let before = chrono::Utc::now() - chrono::Duration::seconds(1);
        let channel: crate::Channel = v0::DataChannel {
            name: "chA".to_string(),
            ..Default::default()
        }
        .into();

        assert!(channel.created_at >= before);
        assert!(!channel.available && !channel.unavailable);
    }

    #[test]
    fn data_channel_keeps_supplied_fields() {
        let created_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let channel: crate::Channel = v0::DataChannel {
            name: "chA".to_string(),
            available: true,
            unavailable: true,
            created_at: Some(created_at),
        }
        .into();

        assert_eq!(channel.created_at, created_at);
        assert!(channel.available && channel.unavailable);
    }
}
