use std::rc::Rc;

use crate::analytics::{AnalyticsSink, GtagAnalytics};
use crate::celebration::{Celebration, Confetti};
use crate::waitlist::{SupabaseWaitlist, WaitlistService};

/// External collaborators, handed down through a `ContextProvider`.
#[derive(Clone)]
pub struct Services {
    pub waitlist: Rc<dyn WaitlistService>,
    pub analytics: Rc<dyn AnalyticsSink>,
    pub celebration: Rc<dyn Celebration>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            waitlist: Rc::new(SupabaseWaitlist::default()),
            analytics: Rc::new(GtagAnalytics),
            celebration: Rc::new(Confetti),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.waitlist, &other.waitlist)
            && Rc::ptr_eq(&self.analytics, &other.analytics)
            && Rc::ptr_eq(&self.celebration, &other.celebration)
    }
}
