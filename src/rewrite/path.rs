//! Request path splitting

use super::error::PathError;

/// A request path split around its last `/` and the last `.` of the file
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePath<'a> {
    /// Everything before the last `/`, possibly empty
    pub prefix: &'a str,
    /// File name without its extension, possibly empty
    pub base_name: &'a str,
    /// Extension as it appears in the request
    pub extension: &'a str,
}

impl<'a> ImagePath<'a> {
    pub fn parse(path: &'a str) -> Result<Self, PathError> {
        let (prefix, file_name) = path
            .rsplit_once('/')
            .ok_or_else(|| PathError::MissingSeparator {
                path: path.to_string(),
            })?;

        let (base_name, extension) =
            file_name
                .rsplit_once('.')
                .ok_or_else(|| PathError::MissingExtension {
                    path: path.to_string(),
                })?;

        if extension.is_empty() {
            return Err(PathError::EmptyExtension {
                path: path.to_string(),
            });
        }

        Ok(Self {
            prefix,
            base_name,
            extension,
        })
    }

    /// The file name segment with its original extension
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.base_name, self.extension)
    }
}
