//! # Plain Object Conversion
//!
//! Queries hand their successful responses to the caller as plain JSON objects rather
//! than generated structs. The conversion goes through `prost-reflect`:
//!
//! 1. The typed message is encoded to Protobuf bytes.
//! 2. The bytes are decoded into a `DynamicMessage` using the descriptor found in
//!    [`admin_proto::FILE_DESCRIPTOR_SET`].
//! 3. The `DynamicMessage` is serialized into a `serde_json::Value` following the
//!    proto3 JSON mapping (camelCase names), with default-valued fields kept so
//!    `status: false` or empty lists are still present, and 64-bit integers are
//!    kept as JSON numbers.
//! 4. Keys are rewritten to the grpc-web `toObject()` shape the dashboard reads:
//!    repeated fields get a `List` suffix (`data` -> `dataList`), and map fields
//!    get a `Map` suffix and become an array of `[key, value]` pairs.
use prost::{Message, Name};
use prost_reflect::{DescriptorPool, DynamicMessage, Kind, MessageDescriptor, SerializeOptions};
use serde_json::{Map, Value};
use std::sync::LazyLock;

static POOL: LazyLock<Result<DescriptorPool, String>> = LazyLock::new(|| {
    DescriptorPool::decode(admin_proto::FILE_DESCRIPTOR_SET).map_err(|e| e.to_string())
});

#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("Failed to decode the admin file descriptor set: '{0}'")]
    Descriptor(String),
    #[error("Message '{0}' not found in the admin file descriptor set")]
    UnknownMessage(String),
    #[error("Failed to decode '{name}' as a dynamic message: '{source}'")]
    Decode {
        name: String,
        source: prost::DecodeError,
    },
    #[error("Failed to map '{name}' to JSON: '{source}'")]
    Json {
        name: String,
        source: serde_json::Error,
    },
}

/// Converts a generated message into its plain JSON object form.
pub fn to_object<M>(message: &M) -> Result<serde_json::Value, ObjectError>
where
    M: Message + Name,
{
    let pool = POOL
        .as_ref()
        .map_err(|e| ObjectError::Descriptor(e.clone()))?;

    let name = M::full_name();
    let descriptor = pool
        .get_message_by_name(&name)
        .ok_or_else(|| ObjectError::UnknownMessage(name.clone()))?;

    let dynamic = DynamicMessage::decode(descriptor.clone(), message.encode_to_vec().as_slice())
        .map_err(|source| ObjectError::Decode {
            name: name.clone(),
            source,
        })?;

    // int64 fields stay numbers, as the dashboard consumes them.
    let options = SerializeOptions::new()
        .skip_default_fields(false)
        .stringify_64_bit_integers(false);
    let mut value = dynamic
        .serialize_with_options(serde_json::value::Serializer, &options)
        .map_err(|source| ObjectError::Json { name, source })?;

    rename_to_object_keys(&mut value, &descriptor);
    Ok(value)
}

fn rename_to_object_keys(value: &mut Value, descriptor: &MessageDescriptor) {
    let Value::Object(object) = value else {
        return;
    };

    let mut renamed = Map::with_capacity(object.len());
    for field in descriptor.fields() {
        let json_name = field.json_name();
        let Some(mut inner) = object.remove(json_name) else {
            continue;
        };

        let key = if field.is_map() {
            inner = map_to_entries(inner, field.kind());
            format!("{json_name}Map")
        } else if field.is_list() {
            if let (Kind::Message(child), Value::Array(items)) = (field.kind(), &mut inner) {
                items
                    .iter_mut()
                    .for_each(|item| rename_to_object_keys(item, &child));
            }
            format!("{json_name}List")
        } else {
            if let Kind::Message(child) = field.kind() {
                rename_to_object_keys(&mut inner, &child);
            }
            json_name.to_string()
        };

        renamed.insert(key, inner);
    }

    // Anything the descriptor does not know about is kept as is.
    renamed.append(object);
    *object = renamed;
}

fn map_to_entries(value: Value, entry_kind: Kind) -> Value {
    let Value::Object(entries) = value else {
        return value;
    };
    let value_kind = match entry_kind {
        Kind::Message(entry) => Some(entry.map_entry_value_field().kind()),
        _ => None,
    };

    entries
        .into_iter()
        .map(|(key, mut entry_value)| {
            if let Some(Kind::Message(child)) = &value_kind {
                rename_to_object_keys(&mut entry_value, child);
            }
            Value::Array(vec![Value::String(key), entry_value])
        })
        .collect()
}
