//! The JSON backend emits reflection data instead of source.
