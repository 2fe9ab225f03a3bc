pub mod fswebcam_frame_source;

pub use fswebcam_frame_source::FswebcamFrameSource;
