pub mod grouped_dp;
pub mod normalize;
pub mod similarity;
pub mod timing;
