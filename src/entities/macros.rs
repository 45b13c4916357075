//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the document struct, its patch struct and the
//! `Entity`/`EntityPatch` implementations for each stored entity type.

/// Complete macro to create a document entity with automatic trait implementations
///
/// Generates:
/// - `$type` with a store-assigned `id: String` and one `Option<_>` per field
/// - `$patch` with the same optional fields, for inserts and partial updates
/// - `Entity` and `EntityPatch` implementations
///
/// Fields are serialized in camelCase, matching the stored document layout.
///
/// # Example
///
/// ```rust,ignore
/// use cinema::impl_document_entity;
///
/// impl_document_entity!(
///     /// A studio producing movies
///     Studio,
///     StudioPatch,
///     "studios",
///     {
///         name: String,
///         founded_year: i32,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_document_entity {
    (
        $(#[$meta:meta])*
        $type:ident,
        $patch:ident,
        $collection:literal,
        {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $field_type:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $type {
            /// Store-assigned identifier
            pub id: String,

            $(
                $(#[$field_meta])*
                pub $field: Option<$field_type>,
            )*
        }

        #[doc = concat!("Partial field set of [`", stringify!($type), "`] used for inserts and updates")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $patch {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$field_type>,
            )*
        }

        impl $crate::core::entity::EntityPatch<$type> for $patch {
            fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }

            fn apply_to(self, entity: &mut $type) {
                $(
                    if let Some(value) = self.$field {
                        entity.$field = Some(value);
                    }
                )*
            }

            fn into_entity(self, id: String) -> $type {
                $type {
                    id,
                    $($field: self.$field,)*
                }
            }
        }

        impl $crate::core::entity::Entity for $type {
            type Patch = $patch;

            fn resource_name() -> &'static str {
                $collection
            }

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}
