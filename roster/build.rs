use std::io::Result;

fn main() -> Result<()> {
    // Supply a protoc binary when the build host lacks one on PATH.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(path) = protoc_bin_vendored::protoc_bin_path() {
            unsafe {
                std::env::set_var("PROTOC", path);
            }
        }
    }

    prost_build::compile_protos(&["registry.proto"], &["../"])?;

    Ok(())
}
