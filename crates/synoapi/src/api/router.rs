//! Synology Router network manager.

use tracing::{debug, instrument};

use super::{ApiContext, Operation, Verb};
use crate::Result;
use crate::models::Device;
use crate::webapi::{METHOD_GET, NSM_DEVICE_API};

const GET_CONNECTED_DEVICES: Operation = Operation {
    name: "GetConnectedDevices",
    api: NSM_DEVICE_API,
    method: METHOD_GET,
    verb: Verb::Post,
};

/// Device inventory of a Synology Router.
#[derive(Debug)]
pub struct RouterClient<'a, C: ?Sized> {
    ctx: &'a C,
}

impl<'a, C: ApiContext + ?Sized> RouterClient<'a, C> {
    pub fn new(ctx: &'a C) -> Self {
        Self { ctx }
    }

    /// Every device the router knows of, wired and wireless, online or not.
    #[instrument(skip(self))]
    pub async fn connected_devices(&self) -> Result<Vec<Device>> {
        let sid = self.ctx.session_id().await?;

        let op = GET_CONNECTED_DEVICES;
        let data = op
            .call(self.ctx, &sid, vec![("conntype", "all".to_string())])
            .await?;
        let devices: Vec<Device> = op.decode(data, Some("devices"))?;

        debug!(count = devices.len(), "Listed devices");
        Ok(devices)
    }
}
