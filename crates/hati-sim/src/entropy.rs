//! Rényi-2 entanglement entropy via partial trace.

use ndarray::Array2;
use num_complex::Complex64;

use hati_ir::{IrError, QubitId};

use crate::error::{SimError, SimResult};
use crate::statevector::{NORM_TOLERANCE, Statevector};

/// Rényi-2 entropy of the subsystem spanned by `keep`, in nats.
///
/// Computes the reduced density matrix ρ of the kept qubits by tracing out
/// every other qubit, then S₂ = −ln(Tr ρ²). Rényi-2 is used instead of
/// von Neumann entropy because Tr ρ² follows from squared overlaps of the
/// amplitude vector — no diagonalization of ρ is required.
///
/// An empty `keep` set is the not-yet-emitted boundary case and returns
/// exactly 0. Rounding can push Tr ρ² marginally above 1; the resulting
/// small negative entropy is clamped to 0. A density-matrix trace away from
/// 1 beyond tolerance is reported as [`SimError::NumericalInstability`].
pub fn renyi2_entropy(state: &Statevector, keep: &[QubitId]) -> SimResult<f64> {
    if keep.is_empty() {
        return Ok(0.0);
    }
    let rho = reduced_density_matrix(state, keep)?;

    let trace: f64 = rho.diag().iter().map(|z| z.re).sum();
    if (trace - 1.0).abs() > NORM_TOLERANCE {
        return Err(SimError::NumericalInstability {
            what: "Tr(rho)",
            value: trace,
        });
    }

    // Tr(ρ²) for Hermitian ρ is the squared Frobenius norm.
    let purity: f64 = rho.iter().map(Complex64::norm_sqr).sum();
    Ok((-purity.ln()).max(0.0))
}

/// Reduced density matrix of the kept qubits, dimension 2^k.
///
/// For each environment basis index the kept-qubit amplitudes are gathered
/// into a scratch row and rank-1-accumulated into the upper triangle of ρ,
/// so no reshaped copy of the state is ever materialized.
pub fn reduced_density_matrix(
    state: &Statevector,
    keep: &[QubitId],
) -> SimResult<Array2<Complex64>> {
    let total = state.num_qubits();
    let keep_bits = checked_positions(keep, total)?;
    let env_bits: Vec<usize> = (0..total).filter(|p| !keep_bits.contains(p)).collect();

    let dim_keep = 1usize << keep_bits.len();
    let dim_env = 1usize << env_bits.len();

    // Scatter table: kept-subsystem index → its bits placed at the kept
    // global positions.
    let keep_scatter: Vec<usize> = (0..dim_keep).map(|b| scatter(b, &keep_bits)).collect();

    let amps = state.amplitudes();
    let mut rho = Array2::<Complex64>::zeros((dim_keep, dim_keep));
    let mut row = vec![Complex64::new(0.0, 0.0); dim_keep];

    for e in 0..dim_env {
        let base = scatter(e, &env_bits);
        for (b, &offset) in keep_scatter.iter().enumerate() {
            row[b] = amps[base | offset];
        }
        for i in 0..dim_keep {
            let bra = row[i];
            for j in i..dim_keep {
                rho[[i, j]] += bra * row[j].conj();
            }
        }
    }

    // Mirror the upper triangle; ρ is Hermitian by construction.
    for i in 0..dim_keep {
        for j in 0..i {
            rho[[i, j]] = rho[[j, i]].conj();
        }
    }
    Ok(rho)
}

/// Validate the keep set and return its bit positions.
fn checked_positions(keep: &[QubitId], total: usize) -> SimResult<Vec<usize>> {
    let mut positions = Vec::with_capacity(keep.len());
    for &qubit in keep {
        let pos = qubit.0 as usize;
        if pos >= total {
            return Err(SimError::Ir(IrError::QubitOutOfRange {
                qubit,
                total: total as u32,
            }));
        }
        if positions.contains(&pos) {
            return Err(SimError::Ir(IrError::DuplicateQubit { qubit }));
        }
        positions.push(pos);
    }
    positions.sort_unstable();
    Ok(positions)
}

/// Deposit the low bits of `value` at the given global bit positions.
#[inline]
fn scatter(value: usize, positions: &[usize]) -> usize {
    let mut out = 0;
    for (i, &pos) in positions.iter().enumerate() {
        if (value >> i) & 1 == 1 {
            out |= 1 << pos;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hati_ir::{GateKind, GateOp};

    const LN_2: f64 = std::f64::consts::LN_2;

    #[test]
    fn test_empty_subsystem_is_exactly_zero() {
        let sv = Statevector::new(3).unwrap();
        assert_eq!(renyi2_entropy(&sv, &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_product_state_has_zero_entropy() {
        let mut sv = Statevector::new(2).unwrap();
        sv.apply(&GateOp::single(GateKind::H, QubitId(0)));
        let s2 = renyi2_entropy(&sv, &[QubitId(0)]).unwrap();
        assert!(s2.abs() < 1e-10);
    }

    #[test]
    fn test_bell_pair_half_is_maximally_mixed() {
        let mut sv = Statevector::new(2).unwrap();
        sv.apply(&GateOp::single(GateKind::H, QubitId(0)));
        sv.apply(&GateOp::two(GateKind::CX, QubitId(0), QubitId(1)));
        let s2 = renyi2_entropy(&sv, &[QubitId(1)]).unwrap();
        assert!((s2 - LN_2).abs() < 1e-10);
    }

    #[test]
    fn test_out_of_range_keep_qubit_rejected() {
        let sv = Statevector::new(2).unwrap();
        let result = renyi2_entropy(&sv, &[QubitId(5)]);
        assert!(matches!(result, Err(SimError::Ir(_))));
    }

    #[test]
    fn test_duplicate_keep_qubit_rejected() {
        let sv = Statevector::new(2).unwrap();
        let result = renyi2_entropy(&sv, &[QubitId(0), QubitId(0)]);
        assert!(matches!(result, Err(SimError::Ir(_))));
    }

    #[test]
    fn test_scatter_places_bits() {
        assert_eq!(scatter(0b11, &[1, 4]), 0b10010);
        assert_eq!(scatter(0b01, &[1, 4]), 0b00010);
        assert_eq!(scatter(0, &[1, 4]), 0);
    }
}
