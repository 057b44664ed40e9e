use tracing::warn;

// window.innerWidth, read once by whoever asks
//
// when the width cannot be read we report an infinite width, which every
// breakpoint comparison treats as a wide viewport
pub fn viewport_width() -> f64 {
    match read_inner_width() {
        Ok(width) => width,
        Err(err) => {
            warn!("could not read viewport width, assuming wide: {err:#}");
            f64::INFINITY
        }
    }
}

fn read_inner_width() -> anyhow::Result<f64> {
    let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))?;

    let width = window
        .inner_width()
        .map_err(|err| anyhow::Error::msg(format!("innerWidth failed: {err:?}")))?;

    width
        .as_f64()
        .ok_or_else(|| anyhow::Error::msg("innerWidth is not a number"))
}
