pub mod univariate_polynomial;

pub use univariate_polynomial::dense_coefficient_form::UnivariatePolynomial;
