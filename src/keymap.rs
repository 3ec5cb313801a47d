use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Step applied by every shading-parameter key press
pub const PARAM_STEP: f32 = 0.1;
/// Lower bounds enforced on decrement only; increments are unbounded
pub const DEPTH_SCALE_FLOOR: f32 = 1.1;
pub const ZMIN_FLOOR: f32 = 0.1;
pub const ORIENTATION_EXP_FLOOR: f32 = 0.1;

/// Active model/texture indices, always within the loaded collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub model_index: usize,
    pub texture_index: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            model_index: 0,
            texture_index: 0,
        }
    }

    /// Select a model slot; a slot with no loaded model is ignored
    pub fn select_model(&mut self, slot: usize, model_count: usize) {
        if slot < model_count {
            self.model_index = slot;
        }
    }

    /// Select a texture slot; a slot with no loaded texture is ignored
    pub fn select_texture(&mut self, slot: usize, texture_count: usize) {
        if slot < texture_count {
            self.texture_index = slot;
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

/// Fragment-stage shading parameters
///
/// Pure shader-uniform inputs; they never touch geometry. Decrements
/// saturate at their floors, increments are unbounded - the asymmetry is
/// intentional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParams {
    pub use_orientation: bool,
    pub orientation_exp: f32,
    pub zmin: f32,
    pub depth_scale: f32,
}

impl ShadingParams {
    pub fn new() -> Self {
        Self {
            use_orientation: false,
            orientation_exp: 1.0,
            zmin: 0.1,
            depth_scale: 3.0,
        }
    }

    pub fn toggle_orientation(&mut self) {
        self.use_orientation = !self.use_orientation;
    }

    pub fn increase_depth_scale(&mut self) {
        self.depth_scale += PARAM_STEP;
    }

    pub fn decrease_depth_scale(&mut self) {
        self.depth_scale = (self.depth_scale - PARAM_STEP).max(DEPTH_SCALE_FLOOR);
    }

    pub fn increase_zmin(&mut self) {
        self.zmin += PARAM_STEP;
    }

    pub fn decrease_zmin(&mut self) {
        self.zmin = (self.zmin - PARAM_STEP).max(ZMIN_FLOOR);
    }

    pub fn increase_orientation_exp(&mut self) {
        self.orientation_exp += PARAM_STEP;
    }

    pub fn decrease_orientation_exp(&mut self) {
        self.orientation_exp = (self.orientation_exp - PARAM_STEP).max(ORIENTATION_EXP_FLOOR);
    }
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys handled on press transitions (and auto-repeat), not polled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscreteKey {
    /// Selection slot, 0-based (digit key minus one)
    Slot(usize),
    DepthScale,
    Zmin,
    OrientationToggle,
    OrientationExp,
    Escape,
}

impl DiscreteKey {
    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        match keycode {
            KeyCode::Digit1 => Some(Self::Slot(0)),
            KeyCode::Digit2 => Some(Self::Slot(1)),
            KeyCode::Digit3 => Some(Self::Slot(2)),
            KeyCode::Digit4 => Some(Self::Slot(3)),
            KeyCode::Digit5 => Some(Self::Slot(4)),
            KeyCode::Digit6 => Some(Self::Slot(5)),
            KeyCode::Digit7 => Some(Self::Slot(6)),
            KeyCode::KeyR => Some(Self::DepthScale),
            KeyCode::KeyT => Some(Self::Zmin),
            KeyCode::KeyF => Some(Self::OrientationToggle),
            KeyCode::KeyG => Some(Self::OrientationExp),
            KeyCode::Escape => Some(Self::Escape),
            _ => None,
        }
    }

    /// Map a keyboard event to a discrete action
    ///
    /// Every press fires, OS auto-repeat included: holding a parameter key
    /// keeps stepping it. Releases never fire.
    pub fn from_key_press(keycode: KeyCode, state: ElementState, _repeat: bool) -> Option<Self> {
        if state.is_pressed() {
            Self::from_keycode(keycode)
        } else {
            None
        }
    }
}

/// What the render loop should do after a discrete key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Apply one discrete key press
///
/// Unmodified: digits select the model, R/T/G increment parameters, F
/// toggles orientation mode, Escape requests exit. Shift-modified: digits
/// select the texture, R/T/G decrement with floors. There is no
/// shift-modified F.
pub fn handle_key(
    key: DiscreteKey,
    shifted: bool,
    selection: &mut Selection,
    params: &mut ShadingParams,
    model_count: usize,
    texture_count: usize,
) -> Outcome {
    if !shifted {
        match key {
            DiscreteKey::Slot(slot) => selection.select_model(slot, model_count),
            DiscreteKey::DepthScale => params.increase_depth_scale(),
            DiscreteKey::Zmin => params.increase_zmin(),
            DiscreteKey::OrientationToggle => params.toggle_orientation(),
            DiscreteKey::OrientationExp => params.increase_orientation_exp(),
            DiscreteKey::Escape => return Outcome::Exit,
        }
    } else {
        match key {
            DiscreteKey::Slot(slot) => selection.select_texture(slot, texture_count),
            DiscreteKey::DepthScale => params.decrease_depth_scale(),
            DiscreteKey::Zmin => params.decrease_zmin(),
            DiscreteKey::OrientationExp => params.decrease_orientation_exp(),
            DiscreteKey::OrientationToggle | DiscreteKey::Escape => {}
        }
    }
    Outcome::Continue
}
