use serde::Serialize;

/// The connection type advertised to a host UI.
pub const CONNECTION_TYPE: &str = "GoogleCloudSource";

/// The configuration fields a host UI must collect.
pub const CONNECTION_FIELDS: [&str; 3] = ["project_id", "token", "target_directory"];

const ICON_SVG: &str = r##"<svg viewBox="0 0 24 24" fill="none" width="24" height="24" xmlns="http://www.w3.org/2000/svg">
  <path d="M12 2L2 12h3v5h14v-5h3L12 2z" fill="#4285F4"/>
  <text x="50%" y="70%" font-size="5" fill="white" text-anchor="middle" alignment-baseline="middle">GCS</text>
</svg>"##;

/// A static description of the mirror source, consumed by a host UI.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    /// The connection type.
    pub connection_type: String,

    /// The required configuration fields.
    pub fields: Vec<String>,

    /// The presentation icon, as SVG markup.
    pub icon: String,
}

impl Default for ConnectionDescriptor {
    fn default() -> Self {
        Self {
            connection_type: CONNECTION_TYPE.to_string(),
            fields: CONNECTION_FIELDS.iter().map(|f| f.to_string()).collect(),
            icon: ICON_SVG.to_string(),
        }
    }
}
