//! # Admin Proto
//!
//! Generated `tonic`/`prost` bindings for the AvoRed admin gRPC services, plus the
//! encoded `FileDescriptorSet` used to render responses as plain JSON objects.
//!
//! Both clients and servers are generated. The hooks only use the clients; the
//! servers exist so integration tests can run an in-process backend.

pub mod admin_user {
    include!(concat!(env!("OUT_DIR"), "/admin_user.rs"));
}

pub mod auth {
    include!(concat!(env!("OUT_DIR"), "/auth.rs"));
}

pub mod content {
    include!(concat!(env!("OUT_DIR"), "/content.rs"));
}

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("descriptors");

/// Implements [`prost::Name`] so a message can be located in [`FILE_DESCRIPTOR_SET`].
macro_rules! impl_name {
    ($package:literal => $($ty:ident),+ $(,)?) => {
        $(
            impl prost::Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = $package;
            }
        )+
    };
}

use admin_user::RoleOptionResponse;
use auth::ForgotPasswordResponse;
use content::{
    ContentPaginateResponse, DeleteContentResponse, GetContentResponse,
    PutContentIdentifierResponse,
};

impl_name!("admin_user" => RoleOptionResponse);
impl_name!("auth" => ForgotPasswordResponse);
impl_name!(
    "content" =>
    ContentPaginateResponse,
    GetContentResponse,
    DeleteContentResponse,
    PutContentIdentifierResponse,
);
