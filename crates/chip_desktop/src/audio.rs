use tinyaudio::prelude::*;

/// Continuous sine tone, running only while the machine asks for sound
pub struct Device {
    inner: Option<Box<dyn BaseAudioOutputDevice>>,
    params: OutputDeviceParameters,
    tone_hz: f32,
    volume: f32
}
impl Device {
    pub fn new(params: OutputDeviceParameters, tone_hz: f32, volume: f32) -> Self {
        Self {
            inner: None,
            params,
            tone_hz,
            volume
        }
    }
    pub fn is_playing(&self) -> bool {
        self.inner.is_some()
    }
    pub fn beep(&mut self) {
        if self.inner.is_some() { return }
        let params = self.params.clone();
        let step = self.tone_hz * 2.0 * std::f32::consts::PI / params.sample_rate as f32;
        let volume = self.volume;
        let channels = params.channels_count;
        let device = run_output_device(
            params,
            {
                let mut phase = 0f32;
                move |data| {
                    for samples in data.chunks_mut(channels) {
                        phase = (phase + step) % (2.0 * std::f32::consts::PI);
                        let val = phase.sin() * volume;
                        for sample in samples {
                            *sample = val;
                        }
                    }
                }
            }
        );
        match device {
            Ok(device) => self.inner = Some(device),
            Err(err) => tracing::warn!("audio output unavailable: {err}")
        }
    }
    pub fn stop(&mut self) {
        self.inner.take();
    }
}

pub fn get_device(tone_hz: f32, volume: f32) -> Device {
    let params = OutputDeviceParameters {
        channels_count: 2,
        sample_rate: 44100,
        channel_sample_count: 4410
    };
    Device::new(params, tone_hz, volume)
}
