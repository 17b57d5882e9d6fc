//! Transition and text-animation vocabularies.
//!
//! Records store these as plain strings; unknown tokens are kept verbatim so projects written by
//! newer editors survive a load/save cycle.

use crate::foundation::error::{DeckError, DeckResult};

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every variant in menu order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stored token for this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            /// Parse a stored token (case-insensitive, surrounding whitespace ignored).
            pub fn parse(token: &str) -> DeckResult<Self> {
                let t = token.trim().to_ascii_lowercase();
                match t.as_str() {
                    $($token => Ok($name::$variant),)+
                    other => Err(DeckError::validation(format!(
                        concat!("unknown ", stringify!($name), " '{}'"),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Scene transition played when a slide enters.
    SlideTransition {
        /// Hard cut.
        None => "none",
        /// Opacity crossfade.
        Fade => "fade",
        /// Horizontal slide used by freshly added slides.
        Slide => "slide",
        /// Horizontal slide.
        SlideH => "slide-h",
        /// Vertical slide.
        SlideV => "slide-v",
        /// Scale from half size.
        Zoom => "zoom",
        /// Quarter-turn rotation.
        Rotate => "rotate",
        /// 3D flip around the Y axis.
        Flip => "flip",
        /// Drop in from above.
        Bounce => "bounce",
        /// 3D cube, horizontal.
        CubeH => "cube-h",
        /// 3D cube, vertical.
        CubeV => "cube-v",
        /// Spinning newspaper.
        Newspaper => "newspaper",
        /// Parallax depth slide.
        ParallaxSlide => "parallax-slide",
        /// Blurred dissolve.
        DissolveBlur => "dissolve-blur",
        /// Zoom with half-turn.
        ZoomRotate => "zoom-rotate",
    }
}

token_enum! {
    /// Entrance animation applied to a slide's text blocks.
    TextAnimation {
        /// Static text.
        None => "none",
        /// Character-by-character reveal.
        Typewriter => "typewriter",
        /// Fade while rising.
        FadeUp => "fade-up",
        /// Elastic scale-in.
        Pop => "pop",
        /// Blur to sharp.
        Blur => "blur",
        /// Spring drop.
        Bounce => "bounce",
        /// Shrink from double size.
        ScaleIn => "scale-in",
        /// Pendulum swing from the top edge.
        Swing => "swing",
        /// Neon flicker.
        Flicker => "flicker",
        /// Jitter.
        Glitch => "glitch",
        /// Enter from the left.
        SlideRight => "slide-right",
        /// Enter from the right.
        SlideLeft => "slide-left",
        /// Tip forward around the X axis.
        Rotate3d => "rotate-3d",
        /// Grow from a point.
        ZoomOut => "zoom-out",
        /// Defocus to sharp.
        Focus => "focus",
    }
}

impl Default for SlideTransition {
    fn default() -> Self {
        SlideTransition::Fade
    }
}

impl Default for TextAnimation {
    fn default() -> Self {
        TextAnimation::None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/tokens.rs"]
mod tests;
