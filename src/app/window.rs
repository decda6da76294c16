//! Window creation from configuration

use crate::config::WindowConfig;
use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, WindowAttributes};

/// Builds window attributes for the configured size and mode
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width.max(1), config.height.max(1)))
        .with_resizable(config.resizable);

    if config.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_attributes_follow_config() {
        let mut config = AppConfig::default().window;
        config.title = "Test".to_string();
        config.resizable = false;

        let attrs = window_attributes_from_config(&config);
        assert_eq!(attrs.title, "Test");
        assert!(!attrs.resizable);
        assert!(attrs.fullscreen.is_none());
    }

    #[test]
    fn test_fullscreen_is_borderless() {
        let mut config = AppConfig::default().window;
        config.fullscreen = true;

        let attrs = window_attributes_from_config(&config);
        assert!(matches!(attrs.fullscreen, Some(Fullscreen::Borderless(None))));
    }
}
