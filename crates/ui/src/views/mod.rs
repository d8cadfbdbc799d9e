mod circle;
mod home;
mod notice;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use circle::CircleView;
pub use home::HomeView;
