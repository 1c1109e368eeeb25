use lumen_ui_layout::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Missing { id: NodeId },
    NotMeasured { id: NodeId },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Missing { id } => write!(f, "layout node {id} missing"),
            LayoutError::NotMeasured { id } => {
                write!(f, "layout node {id} has not been measured yet")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
