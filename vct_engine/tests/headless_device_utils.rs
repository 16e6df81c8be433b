#![allow(dead_code)]
//! Headless device utilities - a recording GraphicsDevice for integration tests
//!
//! Integration tests only see the public API, so they cannot reach the
//! crate's internal mock. `HeadlessDevice` implements the public
//! `GraphicsDevice` trait and records every call, which is enough to check
//! the texture pipeline end to end without a GL context.

use std::sync::{Arc, Mutex};
use vct_engine::vct::{Error, GraphicsDevice, Result};
use vct_engine::vct::render::{SamplerParameter, TextureHandle, TextureImageDesc};

/// One recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Create(u32),
    Delete(u32),
    Bind(u32),
    Upload { level: u32, width: u32, height: u32, bytes: Vec<u8> },
    GenerateMipmap,
    Parameter(SamplerParameter),
}

/// Recording device with GL-like name allocation (names start at 1)
#[derive(Default)]
pub struct HeadlessDevice {
    pub calls: Vec<DeviceCall>,
    pub live: Vec<u32>,
    next_name: u32,
    bound: Option<u32>,
}

impl HeadlessDevice {
    /// Calls recorded after the last `Create`, i.e. the most recent upload
    pub fn last_upload_calls(&self) -> &[DeviceCall] {
        let start = self.calls.iter()
            .rposition(|c| matches!(c, DeviceCall::Create(_)))
            .unwrap_or(0);
        &self.calls[start..]
    }

    pub fn parameters(&self) -> Vec<SamplerParameter> {
        self.calls.iter()
            .filter_map(|c| match c {
                DeviceCall::Parameter(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_texture(&mut self) -> Result<TextureHandle> {
        self.next_name += 1;
        self.live.push(self.next_name);
        self.calls.push(DeviceCall::Create(self.next_name));
        TextureHandle::new(self.next_name)
            .ok_or_else(|| Error::BackendError("zero texture name".to_string()))
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.live.retain(|&name| name != texture.get());
        if self.bound == Some(texture.get()) {
            self.bound = None;
        }
        self.calls.push(DeviceCall::Delete(texture.get()));
    }

    fn bind_texture(&mut self, texture: TextureHandle) -> Result<()> {
        if !self.live.contains(&texture.get()) {
            return Err(Error::InvalidResource(format!("texture {} does not exist", texture)));
        }
        self.bound = Some(texture.get());
        self.calls.push(DeviceCall::Bind(texture.get()));
        Ok(())
    }

    fn upload_image_2d(&mut self, image: &TextureImageDesc<'_>) -> Result<()> {
        if self.bound.is_none() {
            return Err(Error::BackendError("no texture bound".to_string()));
        }
        self.calls.push(DeviceCall::Upload {
            level: image.level,
            width: image.width,
            height: image.height,
            bytes: image.data.to_vec(),
        });
        Ok(())
    }

    fn generate_mipmap(&mut self) -> Result<()> {
        self.calls.push(DeviceCall::GenerateMipmap);
        Ok(())
    }

    fn set_sampler_parameter(&mut self, parameter: SamplerParameter) -> Result<()> {
        self.calls.push(DeviceCall::Parameter(parameter));
        Ok(())
    }
}

/// New shared headless device, as both the typed and the trait-object handle
pub fn headless_device() -> (Arc<Mutex<HeadlessDevice>>, Arc<Mutex<dyn GraphicsDevice>>) {
    let typed = Arc::new(Mutex::new(HeadlessDevice::default()));
    let device: Arc<Mutex<dyn GraphicsDevice>> = typed.clone();
    (typed, device)
}
