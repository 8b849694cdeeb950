use crate::components::{Typography, TypographyAlign, TypographyColor, TypographyVariant};
use crate::routes::SiteRoute;
use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container not-found-page">
            <Typography variant=TypographyVariant::DisplayLarge align=TypographyAlign::Center>
                "404"
            </Typography>
            <Typography variant=TypographyVariant::BodyLarge align=TypographyAlign::Center color=TypographyColor::Secondary>
                "Page not found"
            </Typography>
            <nav class="back-nav">
                <A href=SiteRoute::Home.path()>"< Back home"</A>
            </nav>
        </div>
    }
}
