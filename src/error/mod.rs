//! Unified error handling for hotspot-map.
//!
//! - **Error Categories**: classification for retry and messaging decisions
//! - **Domain errors**: validation, network, image and system failures
//! - **Unified Error Type**: `HotspotError` consolidates them
//! - **Error Context**: operation, language and attempt count for logs
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Server | 5xx from the data host | Yes |
//! | Data | Malformed hotspot data or image | No |
//! | User | Unsupported input | No |
//! | System | Filesystem errors | No |
//! | Configuration | Config issues | No |

mod category;
mod context;
mod hotspot_error;
mod image;
mod network;
mod result;
mod system;
mod validation;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use hotspot_error::HotspotError;
pub use image::ImageLoadError;
pub use network::{classify_http_error, NetworkError};
pub use result::{HotspotResult, ResultExt};
pub use system::{classify_io_error, SystemError};
pub use validation::{ConsistencyError, ValidationError, ValidationIssue};
