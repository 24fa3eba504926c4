//! End-to-end tests driving the public dispatch surface the way a
//! caller would: recursive handlers, native callables, batch dispatch.
