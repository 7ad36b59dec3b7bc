//! Web API names, methods and fixed parameters.

// ============================================================================
// Discovery
// ============================================================================

/// Discovery endpoint path, relative to `/webapi/`.
pub const INFO_PATH: &str = "query.cgi";

/// SYNO.API.Info
pub const INFO_API: &str = "SYNO.API.Info";

/// The discovery API is only ever called at version 1.
pub const INFO_VERSION: u32 = 1;

pub const METHOD_QUERY: &str = "query";

// ============================================================================
// Authentication
// ============================================================================

/// SYNO.API.Auth
pub const AUTH_API: &str = "SYNO.API.Auth";

pub const METHOD_LOGIN: &str = "login";

pub const METHOD_LOGOUT: &str = "logout";

/// Session name used when the caller does not name one.
pub const DEFAULT_SESSION: &str = "Default";

/// Query parameter / form field carrying the session id.
pub const SID_PARAM: &str = "_sid";

// ============================================================================
// Router
// ============================================================================

/// SYNO.Core.Network.NSM.Device
pub const NSM_DEVICE_API: &str = "SYNO.Core.Network.NSM.Device";

pub const METHOD_GET: &str = "get";

// ============================================================================
// Surveillance Station
// ============================================================================

/// SYNO.SurveillanceStation.Camera
pub const CAMERA_API: &str = "SYNO.SurveillanceStation.Camera";

/// SYNO.SurveillanceStation.Recording
pub const RECORDING_API: &str = "SYNO.SurveillanceStation.Recording";

pub const METHOD_LIST: &str = "List";

pub const METHOD_GET_LIVE_VIEW_PATH: &str = "GetLiveViewPath";

pub const METHOD_STREAM: &str = "Stream";

/// Camera privilege flag: live view.
pub const PRIV_LIVE_VIEW: u32 = 0x01;

/// Camera privilege flag: recording.
pub const PRIV_RECORDING: u32 = 0x02;
