pub type ScrollineResult<T> = Result<T, ScrollineError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrollineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("keyframe order error: {0}")]
    InvalidKeyframeOrder(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn keyframe_order(msg: impl Into<String>) -> Self {
        Self::InvalidKeyframeOrder(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ScrollineError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            ScrollineError::keyframe_order("x")
                .to_string()
                .contains("keyframe order error:")
        );
        assert!(
            ScrollineError::layout("x")
                .to_string()
                .contains("layout error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ScrollineError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
