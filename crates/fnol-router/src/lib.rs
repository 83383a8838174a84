//! FNOL Router
//!
//! Decides which downstream queue a claim belongs in. The decision is a
//! state-free rule cascade with a hard precedence contract:
//!
//! 1. Missing mandatory fields gate everything → Manual Review
//! 2. Fraud indicators in the description → Investigation Flag
//! 3. Injury claim types → Specialist Queue
//! 4. Numeric estimate below the fast-track threshold → Fast-track,
//!    otherwise → Standard Queue
//! 5. No rule matched → Standard Queue
//!
//! Every decision carries a short machine-generated reason string; the
//! reasoning collaborator may later replace it with richer prose, but the
//! decision itself is final before any external call is made.

#![warn(missing_docs)]

mod missing;
mod output;
mod router;

pub use missing::find_missing;
pub use output::{build_output, OutputRecord};
pub use router::{route, FAST_TRACK_THRESHOLD};
