use crate::graph::Link;
use spvc::spvc_set;
use std::fmt;

/// An opaque set of interface variable ids, owned by a
/// [`Reflector`](super::Reflector).
///
/// Building combined image samplers or a dummy sampler adds variables the set
/// does not know about. Such a set still works but is logged as stale when
/// used.
pub struct Set {
    pub(crate) link: Link,
    pub(crate) handle: spvc_set,
    revision: u32,
}

impl Set {
    pub(crate) fn new(link: Link, handle: spvc_set, revision: u32) -> Set {
        Set { link, handle, revision }
    }

    pub fn is_alive(&self) -> bool {
        self.link.is_alive()
    }

    pub(crate) fn warn_if_stale(&self, current: u32) {
        if self.revision != current {
            log::warn!(
                "interface variable set {:p} predates combined sampler changes ({} != {})",
                self.handle,
                self.revision,
                current
            );
        }
    }
}

impl fmt::Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field("revision", &self.revision)
            .field("link", &self.link)
            .finish()
    }
}
