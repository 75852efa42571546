//! The trait every machine state implements.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A position in a state machine.
///
/// States are small immutable values. They are copied into the transition
/// history, compared against the edge table and serialized into snapshots,
/// which is what the supertraits are for. Declare one with
/// [`state_enum!`](crate::state_enum) rather than implementing this by hand.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in log fields and error messages.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Tray {
        Empty,
        Loaded,
    }

    impl State for Tray {
        fn name(&self) -> &str {
            match self {
                Self::Empty => "Empty",
                Self::Loaded => "Loaded",
            }
        }
    }

    fn names<S: State>(states: &[S]) -> Vec<&str> {
        states.iter().map(State::name).collect()
    }

    #[test]
    fn name_is_usable_generically() {
        assert_eq!(names(&[Tray::Loaded, Tray::Empty]), vec!["Loaded", "Empty"]);
    }

    #[test]
    fn state_serializes() {
        let json = serde_json::to_string(&Tray::Loaded).unwrap();
        let back: Tray = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tray::Loaded);
    }
}
