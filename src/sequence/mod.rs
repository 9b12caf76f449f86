pub(crate) mod plan;
pub(crate) mod sequencer;
pub(crate) mod timer;
pub(crate) mod timing;
pub(crate) mod visibility;
