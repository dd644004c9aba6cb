//! Number fields Q(α) given by a minimal polynomial.
//!
//! Arithmetic happens in the power basis `1, α, α², ..., α^(n-1)`, where `n`
//! is the degree of the monic minimal polynomial of `α`. Products are reduced
//! modulo the minimal polynomial; reciprocals come from solving the
//! multiplication matrix exactly.
//!
//! A field may expose a different coordinate basis (vZome stores heptagon
//! numbers against `1, ρ, σ`). Coefficients are then converted to power
//! coordinates on the way in and back on the way out.

use vzome_integers::{BigRational, Rational};

use crate::{AlgebraError, AlgebraicField, NumberFormat};

/// Name of the golden field, Q(φ).
pub const GOLDEN: &str = "golden";
/// Name of Q(√2).
pub const ROOT_TWO: &str = "rootTwo";
/// Name of Q(√3).
pub const ROOT_THREE: &str = "rootThree";
/// Name of Q(√φ).
pub const SQRT_PHI: &str = "sqrtPhi";
/// Name of the heptagon field, Q(2cos(π/7)).
pub const HEPTAGON: &str = "heptagon";
/// Name of the snub cube field, Q(tribonacci constant).
pub const SNUB_CUBE: &str = "snubCube";

const PHI: f64 = 1.618_033_988_749_895;

type Matrix = Vec<Vec<BigRational>>;

/// Change of coordinates between a field basis and the power basis.
#[derive(Clone, Debug)]
struct Basis {
    /// Column `j` is basis element `j` in power coordinates.
    to_power: Matrix,
    from_power: Matrix,
}

/// An algebraic number field Q(α).
#[derive(Clone, Debug)]
pub struct PolynomialField {
    name: String,
    /// Monic minimal polynomial `[a_0, a_1, ..., a_{n-1}, 1]`.
    min_poly: Vec<BigRational>,
    degree: usize,
    /// Real value of α used for evaluation.
    generator: f64,
    /// `(unicode, ascii)` symbols of basis elements `1..n`.
    symbols: Vec<(String, String)>,
    basis: Option<Basis>,
}

impl PolynomialField {
    /// Creates a field from a minimal polynomial `[a_0, ..., a_n]`, using the
    /// power basis.
    ///
    /// The polynomial is made monic. It must be irreducible over Q for
    /// every non-zero element to have a reciprocal; reducible inputs surface
    /// as [`AlgebraError::DivisionByZero`] on zero divisors.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidArity`] if the polynomial has degree < 1
    /// once trailing zero coefficients are dropped.
    pub fn new(
        name: impl Into<String>,
        mut min_poly: Vec<BigRational>,
        generator: f64,
        symbol: &str,
        ascii_symbol: &str,
    ) -> Result<Self, AlgebraError> {
        let name = name.into();
        while min_poly.last().is_some_and(Rational::is_zero) {
            min_poly.pop();
        }
        let Some(lead) = min_poly.last() else {
            return Err(AlgebraError::InvalidArity {
                field: name,
                expected: 2,
                got: 0,
            });
        };
        if min_poly.len() < 2 {
            return Err(AlgebraError::InvalidArity {
                field: name,
                expected: 2,
                got: min_poly.len(),
            });
        }
        let lead_inv = lead.reciprocal()?;
        let min_poly = min_poly.iter().map(|c| c.times(&lead_inv)).collect();
        Ok(Self::from_monic(name, min_poly, generator, symbol, ascii_symbol))
    }

    fn from_monic(
        name: impl Into<String>,
        min_poly: Vec<BigRational>,
        generator: f64,
        symbol: &str,
        ascii_symbol: &str,
    ) -> Self {
        let degree = min_poly.len() - 1;
        let symbols = (1..degree)
            .map(|i| {
                if i == 1 {
                    (symbol.to_string(), ascii_symbol.to_string())
                } else {
                    (format!("{symbol}^{i}"), format!("{ascii_symbol}^{i}"))
                }
            })
            .collect();
        Self {
            name: name.into(),
            min_poly,
            degree,
            generator,
            symbols,
            basis: None,
        }
    }

    // `coeffs` must describe a monic polynomial of degree >= 1.
    fn from_integer_poly(name: &str, coeffs: &[i64], generator: f64, symbol: &str, ascii: &str) -> Self {
        let min_poly = coeffs.iter().map(|&c| BigRational::from(c)).collect();
        Self::from_monic(name, min_poly, generator, symbol, ascii)
    }

    /// Replaces the power basis with `elements`, each given in power
    /// coordinates. `symbols` names elements `1..n` as `(unicode, ascii)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidArity`] unless there are `degree`
    /// elements and `degree - 1` symbols, and [`AlgebraError::InvalidBasis`]
    /// if the first element is not 1 or the elements are linearly dependent.
    pub fn with_basis(
        mut self,
        elements: &[Vec<BigRational>],
        symbols: &[(&str, &str)],
    ) -> Result<Self, AlgebraError> {
        let n = self.degree;
        for (expected, got) in [(n, elements.len()), (n - 1, symbols.len())] {
            if expected != got {
                return Err(AlgebraError::InvalidArity {
                    field: self.name,
                    expected,
                    got,
                });
            }
        }
        let columns: Matrix = elements.iter().map(|e| self.reduce(e.clone())).collect();
        if columns[0] != unit(n, 0) {
            return Err(AlgebraError::InvalidBasis(format!(
                "first basis element of `{}` must be 1",
                self.name
            )));
        }
        let to_power = transpose(&columns);
        let inverse_columns = (0..n)
            .map(|k| solve(to_power.clone(), unit(n, k)))
            .collect::<Result<Matrix, _>>()
            .map_err(|_| {
                AlgebraError::InvalidBasis(format!("basis of `{}` is linearly dependent", self.name))
            })?;
        self.basis = Some(Basis {
            to_power,
            from_power: transpose(&inverse_columns),
        });
        self.symbols = symbols
            .iter()
            .map(|&(symbol, ascii)| (symbol.to_string(), ascii.to_string()))
            .collect();
        Ok(self)
    }

    // Both matrices are given by integer columns and must be inverse to each other.
    fn with_integer_basis(
        mut self,
        to_power: &[&[i64]],
        from_power: &[&[i64]],
        symbols: &[(&str, &str)],
    ) -> Self {
        let columns = |cols: &[&[i64]]| -> Matrix {
            cols.iter()
                .map(|col| col.iter().map(|&c| BigRational::from(c)).collect())
                .collect()
        };
        self.basis = Some(Basis {
            to_power: transpose(&columns(to_power)),
            from_power: transpose(&columns(from_power)),
        });
        self.symbols = symbols
            .iter()
            .map(|&(symbol, ascii)| (symbol.to_string(), ascii.to_string()))
            .collect();
        self
    }

    /// Q(φ) with `φ² = φ + 1`.
    #[must_use]
    pub fn golden() -> Self {
        Self::from_integer_poly(GOLDEN, &[-1, -1, 1], PHI, "φ", "phi")
    }

    /// Q(√2).
    #[must_use]
    pub fn root_two() -> Self {
        Self::from_integer_poly(ROOT_TWO, &[-2, 0, 1], std::f64::consts::SQRT_2, "√2", "sqrt2")
    }

    /// Q(√3).
    #[must_use]
    pub fn root_three() -> Self {
        Self::from_integer_poly(ROOT_THREE, &[-3, 0, 1], 1.732_050_807_568_877_2, "√3", "sqrt3")
    }

    /// Q(√φ), degree 4, with vZome's basis `1, φ, √φ, φ√φ`.
    ///
    /// With `α = √φ` (`α⁴ = α² + 1`) the basis is `1, α², α, α³`.
    #[must_use]
    pub fn sqrt_phi() -> Self {
        let swap: &[&[i64]] = &[&[1, 0, 0, 0], &[0, 0, 1, 0], &[0, 1, 0, 0], &[0, 0, 0, 1]];
        Self::from_integer_poly(SQRT_PHI, &[-1, 0, -1, 0, 1], PHI.sqrt(), "√φ", "sqrtphi")
            .with_integer_basis(
                swap,
                swap,
                &[("φ", "phi"), ("√φ", "sqrtphi"), ("φ√φ", "phi*sqrtphi")],
            )
    }

    /// Q(ρ) with `ρ = 2cos(π/7)` (`ρ³ = ρ² + 2ρ - 1`), with vZome's basis
    /// `1, ρ, σ` where `σ = ρ² - 1`.
    #[must_use]
    pub fn heptagon() -> Self {
        Self::from_integer_poly(HEPTAGON, &[1, -2, -1, 1], 1.801_937_735_804_838_3, "ρ", "rho")
            .with_integer_basis(
                &[&[1, 0, 0], &[0, 1, 0], &[-1, 0, 1]],
                // ρ² = 1 + σ
                &[&[1, 0, 0], &[0, 1, 0], &[1, 0, 1]],
                &[("ρ", "rho"), ("σ", "sigma")],
            )
    }

    /// Q(ξ) with ξ the tribonacci constant, degree 3: `x³ - x² - x - 1`.
    #[must_use]
    pub fn snub_cube() -> Self {
        Self::from_integer_poly(SNUB_CUBE, &[-1, -1, -1, 1], 1.839_286_755_214_161, "ξ", "xi")
    }

    /// Returns the degree of the extension.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the monic minimal polynomial.
    #[must_use]
    pub fn min_poly(&self) -> &[BigRational] {
        &self.min_poly
    }

    /// Reduces a polynomial modulo the minimal polynomial, leaving exactly
    /// `degree` coefficients.
    fn reduce(&self, mut coeffs: Vec<BigRational>) -> Vec<BigRational> {
        while coeffs.len() > self.degree {
            let Some(high) = coeffs.pop() else { break };
            if high.is_zero() {
                continue;
            }
            // α^k = α^(k-n) · α^n and α^n = -(a_0 + a_1 α + ... + a_{n-1} α^{n-1})
            let shift = coeffs.len() - self.degree;
            for (i, a) in self.min_poly.iter().take(self.degree).enumerate() {
                let t = high.times(a);
                coeffs[shift + i] = coeffs[shift + i].minus(&t);
            }
        }
        coeffs.resize(self.degree, BigRational::zero());
        coeffs
    }

    fn times_generator(&self, coeffs: &[BigRational]) -> Vec<BigRational> {
        let mut shifted = Vec::with_capacity(coeffs.len() + 1);
        shifted.push(BigRational::zero());
        shifted.extend_from_slice(coeffs);
        self.reduce(shifted)
    }

    fn to_power(&self, coeffs: &[BigRational]) -> Vec<BigRational> {
        match &self.basis {
            Some(basis) => apply(&basis.to_power, coeffs),
            None => coeffs.to_vec(),
        }
    }

    fn from_power(&self, coeffs: Vec<BigRational>) -> Vec<BigRational> {
        match &self.basis {
            Some(basis) => apply(&basis.from_power, &coeffs),
            None => coeffs,
        }
    }

    fn power_multiply(&self, a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
        if a.is_empty() || b.is_empty() {
            return vec![BigRational::zero(); self.degree];
        }
        let mut product = vec![BigRational::zero(); a.len() + b.len() - 1];
        for (i, x) in a.iter().enumerate() {
            if x.is_zero() {
                continue;
            }
            for (j, y) in b.iter().enumerate() {
                let t = x.times(y);
                product[i + j] = product[i + j].plus(&t);
            }
        }
        self.reduce(product)
    }

    fn power_reciprocal(&self, a: &[BigRational]) -> Result<Vec<BigRational>, AlgebraError> {
        // Column j of the matrix is a·α^j; solve M·y = e_0.
        let n = self.degree;
        let mut matrix = vec![vec![BigRational::zero(); n]; n];
        let mut column = self.reduce(a.to_vec());
        for j in 0..n {
            for (i, c) in column.iter().enumerate() {
                matrix[i][j] = c.clone();
            }
            if j + 1 < n {
                column = self.times_generator(&column);
            }
        }
        solve(matrix, unit(n, 0))
    }
}

impl AlgebraicField for PolynomialField {
    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> usize {
        self.degree
    }

    fn multiply(&self, a: &[BigRational], b: &[BigRational]) -> Vec<BigRational> {
        let product = self.power_multiply(&self.to_power(a), &self.to_power(b));
        self.from_power(product)
    }

    fn reciprocal(&self, a: &[BigRational]) -> Result<Vec<BigRational>, AlgebraError> {
        if a.iter().all(Rational::is_zero) {
            return Err(AlgebraError::DivisionByZero);
        }
        let inverse = self.power_reciprocal(&self.to_power(a))?;
        Ok(self.from_power(inverse))
    }

    fn evaluate(&self, coeffs: &[BigRational]) -> f64 {
        self.to_power(coeffs)
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * self.generator + c.evaluate())
    }

    fn irrational(&self, index: usize, format: NumberFormat) -> String {
        let Some((symbol, ascii)) = index.checked_sub(1).and_then(|i| self.symbols.get(i)) else {
            return String::new();
        };
        match format {
            NumberFormat::Expression => ascii.clone(),
            _ => symbol.clone(),
        }
    }
}

fn unit(n: usize, k: usize) -> Vec<BigRational> {
    let mut v = vec![BigRational::zero(); n];
    v[k] = BigRational::one();
    v
}

fn transpose(matrix: &[Vec<BigRational>]) -> Matrix {
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|j| matrix.iter().map(|row| row[j].clone()).collect())
        .collect()
}

fn apply(matrix: &[Vec<BigRational>], v: &[BigRational]) -> Vec<BigRational> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(v)
                .filter(|(m, x)| !m.is_zero() && !x.is_zero())
                .fold(BigRational::zero(), |acc, (m, x)| acc.plus(&m.times(x)))
        })
        .collect()
}

/// Gauss-Jordan elimination over the rationals.
fn solve(mut matrix: Matrix, mut rhs: Vec<BigRational>) -> Result<Vec<BigRational>, AlgebraError> {
    let n = rhs.len();
    for col in 0..n {
        let pivot = (col..n)
            .find(|&row| !matrix[row][col].is_zero())
            .ok_or(AlgebraError::DivisionByZero)?;
        matrix.swap(col, pivot);
        rhs.swap(col, pivot);

        let inv = matrix[col][col].reciprocal()?;
        for k in col..n {
            matrix[col][k] = matrix[col][k].times(&inv);
        }
        rhs[col] = rhs[col].times(&inv);

        for row in 0..n {
            if row == col || matrix[row][col].is_zero() {
                continue;
            }
            let factor = matrix[row][col].clone();
            for k in col..n {
                let t = matrix[col][k].times(&factor);
                matrix[row][k] = matrix[row][k].minus(&t);
            }
            let t = rhs[col].times(&factor);
            rhs[row] = rhs[row].minus(&t);
        }
    }
    Ok(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> BigRational {
        BigRational::from(n)
    }

    fn v(coeffs: &[i64]) -> Vec<BigRational> {
        coeffs.iter().map(|&c| q(c)).collect()
    }

    #[test]
    fn test_golden_products() {
        let golden = PolynomialField::golden();
        assert_eq!(golden.order(), 2);
        // 1 * φ = φ
        assert_eq!(golden.multiply(&v(&[1, 0]), &v(&[0, 1])), v(&[0, 1]));
        // φ² = 1 + φ
        assert_eq!(golden.multiply(&v(&[0, 1]), &v(&[0, 1])), v(&[1, 1]));
    }

    #[test]
    fn test_golden_reciprocal() {
        let golden = PolynomialField::golden();
        // 1/φ = φ - 1
        assert_eq!(golden.reciprocal(&v(&[0, 1])).unwrap(), v(&[-1, 1]));
        assert_eq!(golden.reciprocal(&v(&[0, 0])), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_root_two() {
        let field = PolynomialField::root_two();
        // √2 * √2 = 2
        assert_eq!(field.multiply(&v(&[0, 1]), &v(&[0, 1])), v(&[2, 0]));
        // 1/(1 + √2) = √2 - 1
        assert_eq!(field.reciprocal(&v(&[1, 1])).unwrap(), v(&[-1, 1]));
    }

    #[test]
    fn test_high_power_reduction() {
        // Regression: α^k for k > n must reduce at the right offset.
        let field = PolynomialField::new("quartic", v(&[-1, 0, -1, 0, 1]), PHI.sqrt(), "α", "a").unwrap();
        let alpha = v(&[0, 1, 0, 0]);
        let alpha2 = field.multiply(&alpha, &alpha);
        let alpha4 = field.multiply(&alpha2, &alpha2);
        // α⁴ = α² + 1
        assert_eq!(alpha4, v(&[1, 0, 1, 0]));
        let alpha3 = field.multiply(&alpha2, &alpha);
        let alpha6 = field.multiply(&alpha3, &alpha3);
        // α⁶ = α⁴ + α² = 1 + 2α²
        assert_eq!(alpha6, v(&[1, 0, 2, 0]));
    }

    #[test]
    fn test_cubic_reciprocal_roundtrip() {
        let field = PolynomialField::heptagon();
        let a = vec![q(2), BigRational::from_i64(-1, 3).unwrap(), q(5)];
        let inv = field.reciprocal(&a).unwrap();
        assert_eq!(field.multiply(&a, &inv), v(&[1, 0, 0]));
    }

    #[test]
    fn test_evaluate() {
        let golden = PolynomialField::golden();
        assert!((golden.evaluate(&v(&[0, 1])) - PHI).abs() < 1e-12);
        assert!((golden.evaluate(&v(&[1, 1])) - PHI * PHI).abs() < 1e-12);

        let heptagon = PolynomialField::heptagon();
        let rho = heptagon.evaluate(&v(&[0, 1, 0]));
        assert!((rho.powi(3) - rho.powi(2) - 2.0 * rho + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_new_normalizes() {
        // 2x² - 2x - 2 is the golden polynomial up to scale
        let field = PolynomialField::new("scaled", v(&[-2, -2, 2, 0]), PHI, "φ", "phi").unwrap();
        assert_eq!(field.degree(), 2);
        assert_eq!(field.min_poly(), v(&[-1, -1, 1]).as_slice());
    }

    #[test]
    fn test_new_rejects_constant() {
        let err = PolynomialField::new("bad", v(&[5]), 0.0, "x", "x").unwrap_err();
        assert!(matches!(err, AlgebraError::InvalidArity { got: 1, .. }));
        assert!(PolynomialField::new("empty", Vec::new(), 0.0, "x", "x").is_err());
    }

    #[test]
    fn test_irrational_symbols() {
        let field = PolynomialField::sqrt_phi();
        assert_eq!(field.irrational(1, NumberFormat::Default), "φ");
        assert_eq!(field.irrational(2, NumberFormat::Default), "√φ");
        assert_eq!(field.irrational(3, NumberFormat::Expression), "phi*sqrtphi");

        let cubic = PolynomialField::snub_cube();
        assert_eq!(cubic.irrational(2, NumberFormat::Default), "ξ^2");
        assert_eq!(cubic.irrational(2, NumberFormat::Expression), "xi^2");
    }

    #[test]
    fn test_heptagon_basis() {
        let field = PolynomialField::heptagon();
        let rho = v(&[0, 1, 0]);
        let sigma = v(&[0, 0, 1]);
        assert!((field.evaluate(&sigma) - 2.246_979_603_717_467).abs() < 1e-12);
        assert!((field.evaluate(&rho) - 1.801_937_735_804_838).abs() < 1e-12);
        // ρ² = 1 + σ, ρσ = ρ + σ, σ² = 1 + ρ + σ
        assert_eq!(field.multiply(&rho, &rho), v(&[1, 0, 1]));
        assert_eq!(field.multiply(&rho, &sigma), v(&[0, 1, 1]));
        assert_eq!(field.multiply(&sigma, &sigma), v(&[1, 1, 1]));
        let a = v(&[0, -1, 1]);
        let inv = field.reciprocal(&a).unwrap();
        assert_eq!(field.multiply(&a, &inv), v(&[1, 0, 0]));
        assert_eq!(field.number_expression(&v(&[1, 0, 2]), NumberFormat::Default), "1 + 2σ");
    }

    #[test]
    fn test_sqrt_phi_basis() {
        let field = PolynomialField::sqrt_phi();
        let phi = v(&[0, 1, 0, 0]);
        let sqrt_phi = v(&[0, 0, 1, 0]);
        let phi_sqrt_phi = v(&[0, 0, 0, 1]);
        assert!((field.evaluate(&phi) - PHI).abs() < 1e-12);
        assert!((field.evaluate(&sqrt_phi) - PHI.sqrt()).abs() < 1e-12);
        assert!((field.evaluate(&phi_sqrt_phi) - PHI * PHI.sqrt()).abs() < 1e-12);
        // √φ·√φ = φ, φ·√φ = φ√φ, φ√φ·√φ = 1 + φ
        assert_eq!(field.multiply(&sqrt_phi, &sqrt_phi), phi);
        assert_eq!(field.multiply(&phi, &sqrt_phi), phi_sqrt_phi);
        assert_eq!(field.multiply(&phi_sqrt_phi, &sqrt_phi), v(&[1, 1, 0, 0]));
        // 1/√φ = φ√φ - √φ
        assert_eq!(field.reciprocal(&sqrt_phi).unwrap(), v(&[0, 0, -1, 1]));
    }

    #[test]
    fn test_with_basis_matches_builtin() {
        let power = PolynomialField::from_integer_poly(HEPTAGON, &[1, -2, -1, 1], 1.8, "ρ", "rho");
        let field = power
            .with_basis(&[v(&[1]), v(&[0, 1]), v(&[-1, 0, 1])], &[("ρ", "rho"), ("σ", "sigma")])
            .unwrap();
        let builtin = PolynomialField::heptagon();
        let a = v(&[3, -1, 2]);
        let b = v(&[-2, 5, 1]);
        assert_eq!(field.multiply(&a, &b), builtin.multiply(&a, &b));
        assert_eq!(field.reciprocal(&a).unwrap(), builtin.reciprocal(&a).unwrap());
    }

    #[test]
    fn test_with_basis_rejects() {
        let golden = || PolynomialField::golden();
        assert!(matches!(
            golden().with_basis(&[v(&[1, 0])], &[("φ", "phi")]),
            Err(AlgebraError::InvalidArity { expected: 2, got: 1, .. })
        ));
        assert!(matches!(
            golden().with_basis(&[v(&[1, 0]), v(&[0, 1])], &[]),
            Err(AlgebraError::InvalidArity { expected: 1, got: 0, .. })
        ));
        assert!(matches!(
            golden().with_basis(&[v(&[0, 1]), v(&[1, 0])], &[("x", "x")]),
            Err(AlgebraError::InvalidBasis(_))
        ));
        assert!(matches!(
            golden().with_basis(&[v(&[1, 0]), v(&[2, 0])], &[("x", "x")]),
            Err(AlgebraError::InvalidBasis(_))
        ));
    }

    #[test]
    fn test_root_three() {
        let field = PolynomialField::root_three();
        assert_eq!(field.order(), 2);
        // √3·√3 = 3
        assert_eq!(field.multiply(&v(&[0, 1]), &v(&[0, 1])), v(&[3, 0]));
        // 1/(2 + √3) = 2 - √3
        assert_eq!(field.reciprocal(&v(&[2, 1])).unwrap(), v(&[2, -1]));
        let root = field.evaluate(&v(&[0, 1]));
        assert!((root * root - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_snub_cube() {
        let field = PolynomialField::snub_cube();
        let xi = v(&[0, 1, 0]);
        let xi2 = field.multiply(&xi, &xi);
        assert_eq!(xi2, v(&[0, 0, 1]));
        // ξ³ = 1 + ξ + ξ²
        assert_eq!(field.multiply(&xi2, &xi), v(&[1, 1, 1]));
        let a = v(&[1, -2, 3]);
        let inv = field.reciprocal(&a).unwrap();
        assert_eq!(field.multiply(&a, &inv), v(&[1, 0, 0]));
        let x = field.evaluate(&xi);
        assert!((x.powi(3) - x.powi(2) - x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluation_is_a_root() {
        for field in [
            PolynomialField::golden(),
            PolynomialField::root_two(),
            PolynomialField::root_three(),
            PolynomialField::snub_cube(),
        ] {
            let x = field.evaluate(&{
                let mut alpha = v(&[0, 1]);
                alpha.resize(field.degree(), q(0));
                alpha
            });
            let value = field
                .min_poly()
                .iter()
                .rev()
                .fold(0.0, |acc, c| acc * x + c.evaluate());
            assert!(value.abs() < 1e-12, "{}: {value}", field.name());
        }
    }
}
