use crate::domain::camera::FrameSource;
use crate::domain::light::LightDriver;
use crate::domain::members::MemberRepository;
use std::sync::Arc;
use std::time::Duration;

/// Shared handler state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberRepository>,
    pub frame_source: Arc<dyn FrameSource>,
    pub light: Arc<dyn LightDriver>,
    pub stream_retry_interval: Duration,
}

impl AppState {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        frame_source: Arc<dyn FrameSource>,
        light: Arc<dyn LightDriver>,
        stream_retry_interval: Duration,
    ) -> Self {
        Self {
            members,
            frame_source,
            light,
            stream_retry_interval,
        }
    }
}
