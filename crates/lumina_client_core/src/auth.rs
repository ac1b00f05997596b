//! Admin gate. The passcode is checked by the backend (`POST /auth/login`); only a
//! verified passcode is attached to privileged requests.

use crate::api::GalleryApi;
use crate::error::ApiResult;
use log::{info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminGate {
    #[default]
    Locked,
    Unlocked,
}

impl AdminGate {
    pub fn is_unlocked(self) -> bool {
        self == AdminGate::Unlocked
    }

    /// `Locked` for a rejected passcode; transport and server errors propagate.
    /// A passcode that cannot travel in the admin header is rejected without a request.
    pub async fn try_unlock<A: GalleryApi>(api: &A, passcode: &str) -> ApiResult<Self> {
        if !is_header_safe(passcode) {
            warn!("admin gate: passcode has characters the admin header cannot carry");
            return Ok(AdminGate::Locked);
        }
        if api.verify_admin_password(passcode).await? {
            api.set_admin_credential(Some(passcode.to_string()));
            info!("admin gate unlocked");
            Ok(AdminGate::Unlocked)
        } else {
            warn!("admin gate: passcode rejected");
            Ok(AdminGate::Locked)
        }
    }

    pub fn lock<A: GalleryApi>(api: &A) -> Self {
        api.set_admin_credential(None);
        AdminGate::Locked
    }
}

/// Visible ASCII, space and tab: what an HTTP header value accepts.
fn is_header_safe(passcode: &str) -> bool {
    passcode.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b))
}
