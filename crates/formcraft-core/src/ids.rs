//! Typed identifiers for tree nodes
//!
//! Every level of the tree gets its own UUID newtype so a `GroupId` can never
//! be passed where a `FieldId` is expected.

/// Declare a UUID-backed identifier newtype.
///
/// The expansion derives serde traits, so the calling crate needs `serde` and
/// `uuid` as dependencies.
#[macro_export]
macro_rules! node_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                ::uuid::Uuid::parse_str(s).map(Self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

node_id!(
    /// Identifier of a [`Form`](crate::Form)
    FormId
);
node_id!(
    /// Identifier of a [`Tab`](crate::Tab)
    TabId
);
node_id!(
    /// Identifier of a [`Column`](crate::Column)
    ColumnId
);
node_id!(
    /// Identifier of a [`Group`](crate::Group)
    GroupId
);
node_id!(
    /// Identifier of a [`Field`](crate::Field)
    FieldId
);

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(FieldId::new(), FieldId::new());
    }

    #[test]
    fn test_id_round_trips_through_string() {
        let id = GroupId::new();
        let parsed: GroupId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let uuid = Uuid::parse_str("12345678-1234-1234-1234-123456789abc").unwrap();
        let id = TabId::from(uuid);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"12345678-1234-1234-1234-123456789abc\""
        );
    }
}
