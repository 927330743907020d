use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script parse error")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported script version={0} (supported: {supported})", supported = crate::script::SCRIPT_VERSION)]
    UnsupportedVersion(u32),
}
