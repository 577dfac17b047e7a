//! Reverb-send output port.
//!
//! The estimator reports its room-size scalar through [`ReverbParams`], an
//! explicit port injected at construction. Middleware integrations that expose
//! a generic name/value parameter call (RTPCs, game syncs, snapshots) can wrap
//! their sink in [`ReverbSendBridge`], which maps the port onto the two fixed
//! parameter names.

/// Parameter name for the inside reverb send.
pub const INSIDE_ROOM_SIZE: &str = "Inside_Room_Size";

/// Parameter name for the outside reverb send.
pub const OUTSIDE_ROOM_SIZE: &str = "Outside_Room_Size";

/// Sentinel pushed to whichever send is inactive this cycle.
pub const PARAM_INACTIVE: f32 = -1.0;

/// Output port for the two reverb sends.
///
/// Every sampling cycle sets both: the active send receives the computed room
/// size and the other receives [`PARAM_INACTIVE`].
pub trait ReverbParams: Send {
    fn set_inside(&mut self, value: f32);
    fn set_outside(&mut self, value: f32);
}

/// Generic name/value parameter call into an audio middleware.
pub trait ParameterSink: Send {
    fn set_parameter(&mut self, name: &str, value: f32);
}

/// Adapts a [`ParameterSink`] to the [`ReverbParams`] port using the fixed
/// parameter names [`INSIDE_ROOM_SIZE`] and [`OUTSIDE_ROOM_SIZE`].
pub struct ReverbSendBridge<S: ParameterSink> {
    sink: S,
}

impl<S: ParameterSink> ReverbSendBridge<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Consumes the bridge and returns the wrapped sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: ParameterSink> ReverbParams for ReverbSendBridge<S> {
    fn set_inside(&mut self, value: f32) {
        self.sink.set_parameter(INSIDE_ROOM_SIZE, value);
    }

    fn set_outside(&mut self, value: f32) {
        self.sink.set_parameter(OUTSIDE_ROOM_SIZE, value);
    }
}
