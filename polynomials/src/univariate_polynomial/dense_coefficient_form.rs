use ark_ff::PrimeField;
use std::cmp;

/// Dense polynomial over a prime field, coefficients stored lowest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct UnivariatePolynomial<T: PrimeField> {
    pub coefficients: Vec<T>,
}

impl<T: PrimeField> UnivariatePolynomial<T> {
    pub fn new(coefficients: Vec<T>) -> Self {
        UnivariatePolynomial { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|coefficient| !coefficient.is_zero())
            .unwrap_or(0)
    }

    // given a point, evaluate the result of the polynomial at that point
    pub fn evaluate(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::from(0u64), |result, coefficient| result * x + coefficient)
    }

    pub fn constant_term(&self) -> T {
        self.coefficients.first().copied().unwrap_or(T::from(0u64))
    }

    // Given a specific list of points, find the polynomial of least degree through them.
    // Returns None when two x points coincide, since the basis denominators vanish.
    pub fn interpolate(x_points: &[T], y_points: &[T]) -> Option<Self> {
        let n = cmp::min(x_points.len(), y_points.len());

        let mut res = UnivariatePolynomial {
            coefficients: vec![T::from(0u64); n],
        };

        for i in 0..n {
            let mut denominator = T::from(1u64);
            let mut running_poly = UnivariatePolynomial {
                coefficients: vec![T::from(1u64)],
            };

            for j in 0..n {
                if i == j {
                    continue;
                }

                let linear_factor = UnivariatePolynomial {
                    coefficients: vec![-x_points[j], T::from(1u64)],
                };

                denominator *= x_points[i] - x_points[j];
                running_poly = running_poly.mul(&linear_factor);
            }

            let scale = y_points[i] * denominator.inverse()?;
            res = res.add(&running_poly.scalar_mul(scale));
        }

        Some(res)
    }

    pub fn scalar_mul(&self, num: T) -> Self {
        UnivariatePolynomial {
            coefficients: self
                .coefficients
                .iter()
                .map(|coefficient| *coefficient * num)
                .collect(),
        }
    }

    // Multiply polynomials together
    pub fn mul(&self, p2: &Self) -> Self {
        if self.coefficients.is_empty() || p2.coefficients.is_empty() {
            return UnivariatePolynomial::new(vec![]);
        }

        let mut coefs = vec![T::from(0u64); self.coefficients.len() + p2.coefficients.len() - 1];

        for (i, left) in self.coefficients.iter().enumerate() {
            for (j, right) in p2.coefficients.iter().enumerate() {
                coefs[i + j] += *left * right;
            }
        }

        UnivariatePolynomial {
            coefficients: coefs,
        }
    }

    // add polynomials together
    pub fn add(&self, p2: &Self) -> Self {
        let max_len = cmp::max(self.coefficients.len(), p2.coefficients.len());

        let mut coefs = vec![T::from(0u64); max_len];

        for (i, coefficient) in coefs.iter_mut().enumerate() {
            if let Some(left) = self.coefficients.get(i) {
                *coefficient += left;
            }

            if let Some(right) = p2.coefficients.get(i) {
                *coefficient += right;
            }
        }

        UnivariatePolynomial {
            coefficients: coefs,
        }
    }
}

#[cfg(test)]
mod test {
    use super::UnivariatePolynomial;
    use ark_bn254::Fr;

    fn field_points(points: &[u64]) -> Vec<Fr> {
        points.iter().map(|point| Fr::from(*point)).collect()
    }

    #[test]
    pub fn test_evaluate() {
        let poly = UnivariatePolynomial::new(vec![Fr::from(20), Fr::from(10), Fr::from(3)]);

        assert_eq!(poly.evaluate(Fr::from(2)), Fr::from(52));
        assert_eq!(poly.constant_term(), Fr::from(20));
    }

    #[test]
    pub fn test_mul() {
        let poly1 = UnivariatePolynomial::new(vec![Fr::from(0), Fr::from(0), Fr::from(2)]);
        let poly2 =
            UnivariatePolynomial::new(vec![Fr::from(0), Fr::from(0), Fr::from(0), Fr::from(4)]);

        assert_eq!(
            poly1.mul(&poly2).coefficients,
            field_points(&[0, 0, 0, 0, 0, 8])
        );
    }

    #[test]
    pub fn test_add_keeps_longer_tail() {
        let poly1 = UnivariatePolynomial::new(field_points(&[1, 2]));
        let poly2 = UnivariatePolynomial::new(field_points(&[3, 4, 5]));

        assert_eq!(poly1.add(&poly2).coefficients, field_points(&[4, 6, 5]));
        assert_eq!(poly2.add(&poly1).degree(), 2);
    }

    #[test]
    pub fn test_interpolate() {
        // f(x) = x^2 + 3
        let poly = UnivariatePolynomial::interpolate(
            &field_points(&[1, 2, 3]),
            &field_points(&[4, 7, 12]),
        )
        .unwrap();

        assert_eq!(poly.coefficients, field_points(&[3, 0, 1]));
        assert_eq!(poly.evaluate(Fr::from(6)), Fr::from(39));
    }

    #[test]
    pub fn test_interpolate_negative_constant() {
        // f(x) = 2x - 5
        let poly = UnivariatePolynomial::interpolate(
            &field_points(&[2, 4]),
            &[Fr::from(-1), Fr::from(3)],
        )
        .unwrap();

        assert_eq!(poly.constant_term(), -Fr::from(5));
        assert_eq!(poly.degree(), 1);
    }

    #[test]
    pub fn test_interpolate_duplicate_x() {
        let poly = UnivariatePolynomial::interpolate(
            &field_points(&[1, 1, 3]),
            &field_points(&[4, 5, 12]),
        );

        assert!(poly.is_none());
    }
}
