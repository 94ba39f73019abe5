use crate::{error::Result, types::DetectedPlatforms};
use std::fmt::Write as _;
use std::path::Path;

impl DetectedPlatforms {
    /// Emit the platforms as a JavaScript array literal ready to paste into
    /// a game script.
    pub fn to_javascript(&self) -> String {
        if self.platforms.is_empty() {
            return "const platforms = [];".to_string();
        }

        let mut code =
            String::from("// Auto-detected platforms from background image\nconst platforms = [\n");

        for (i, platform) in self.platforms.iter().enumerate() {
            let _ = write!(
                code,
                "    {{x: {}, y: {}, width: {}, height: {}}}",
                platform.x, platform.y, platform.width, platform.height
            );
            if i < self.platforms.len() - 1 {
                code.push(',');
            }
            code.push('\n');
        }

        code.push_str("];\n\nconsole.log(`Loaded ${platforms.length} platforms`);");
        code
    }

    /// Save the generated JavaScript to a file
    pub fn save_javascript<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_javascript())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn empty_list_emits_empty_array() {
        let detected = DetectedPlatforms {
            platforms: vec![],
            image_width: 100,
            image_height: 100,
        };
        assert_eq!(detected.to_javascript(), "const platforms = [];");
    }

    #[test]
    fn emits_one_object_per_platform() {
        let detected = DetectedPlatforms {
            platforms: vec![
                Rect { x: 10, y: 10, width: 20, height: 10 },
                Rect { x: 5, y: 40, width: 30, height: 8 },
            ],
            image_width: 100,
            image_height: 100,
        };

        let code = detected.to_javascript();
        assert_eq!(
            code,
            "// Auto-detected platforms from background image\n\
             const platforms = [\n    \
             {x: 10, y: 10, width: 20, height: 10},\n    \
             {x: 5, y: 40, width: 30, height: 8}\n\
             ];\n\n\
             console.log(`Loaded ${platforms.length} platforms`);"
        );
    }
}
