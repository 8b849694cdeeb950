mod button;
mod card;
mod footer;
mod header;
mod layout;
mod status_indicator;
mod typography;

pub use button::{Button, ButtonColor, ButtonSize, ButtonType, ButtonVariant, LinkButton};
pub use card::{Card, CardElement, CardPadding, CardVariant};
pub use footer::Footer;
pub use header::Header;
pub use layout::MainLayout;
pub use status_indicator::StatusIndicator;
pub use typography::{RenderTarget, Typography, TypographyAlign, TypographyColor, TypographyVariant};
