use std::env::var;
use std::io::Result;

fn main() -> Result<()> {
    let proto_files = &[
        "proto/admin_user.proto",
        "proto/auth.proto",
        "proto/content.proto",
    ];

    let proto_folder = "proto";
    let out_dir = var("OUT_DIR").expect("Missing OUT_DIR environment variable");
    let descriptors_path = format!("{}/descriptors.bin", out_dir);

    // Servers are generated too: tests run the hooks against in-process backends.
    tonic_prost_build::configure()
        .file_descriptor_set_path(descriptors_path)
        .protoc_arg("--experimental_allow_proto3_optional")
        .compile_protos(proto_files, &[proto_folder])?;

    Ok(())
}
