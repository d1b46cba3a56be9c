pub mod geom;
pub mod painter;
pub mod scene;
pub mod style;
pub mod widget;

pub use geom::{Pos, Rect, Size};
pub use scene::Scene;
pub use style::{Color, Mod, Style};
pub use widget::{EventResult, Ui, Widget, WidgetCx};
