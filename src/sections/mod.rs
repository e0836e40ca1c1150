// Landing page sections

mod access;
mod code_list;
mod comparison;
mod console_banner;
mod demo;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod pipeline;
mod reveal;
mod setup;
mod stats;

pub use access::Access;
pub use code_list::CodeList;
pub use comparison::Comparison;
pub use console_banner::ConsoleBanner;
pub use demo::Demo;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use pipeline::Pipeline;
pub use reveal::ScrollReveal;
pub use setup::Setup;
pub use stats::Stats;
