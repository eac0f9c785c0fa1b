use chainalign_core::{semi_global_align, AlignParams, AlignmentReport, SeedParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn params(k: usize, band: usize, discrepancy: f64) -> AlignParams {
    AlignParams {
        seed: SeedParams {
            kmer_size: k,
            ..Default::default()
        },
        band_width: band,
        allowed_length_discrepancy: discrepancy,
        ..Default::default()
    }
}

fn random_sequence(seed: u64, length: usize) -> Vec<u8> {
    const BASES: [u8; 4] = *b"ACGT";
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

fn substitute(base: u8) -> u8 {
    match base {
        b'A' => b'C',
        b'C' => b'G',
        b'G' => b'T',
        _ => b'A',
    }
}

// A base distinct from every excluded one, so inserted bases cannot pair
// with their neighbours and shift the optimal gap placement.
fn base_not_in(excluded: &[u8]) -> u8 {
    *b"ACGT"
        .iter()
        .find(|&&base| !excluded.contains(&base))
        .unwrap()
}

#[test]
fn identical_short_pair_matches_exactly() {
    let report = semi_global_align(b"ACGTACGT", b"ACGTACGT", &params(4, 10, 0.1)).unwrap();
    assert_eq!(report.edit_script, "8M");
    assert_eq!((report.s1_start, report.s1_end), (0, 8));
    assert_eq!((report.s2_start, report.s2_end), (0, 8));
    assert_eq!(report.match_count, 8);
    assert_eq!(report.mismatch_count, 0);
    assert_eq!(report.edit_distance, 0);
    assert_eq!(report.percent_identity, 100.0);
}

#[test]
fn self_alignment_is_all_matches() {
    let seq = random_sequence(7, 300);
    let report = semi_global_align(&seq, &seq, &params(12, 20, 0.1)).unwrap();
    assert_eq!(report.edit_script, "300M");
    assert_eq!(report.match_count, 300);
    assert_eq!(report.mismatch_count, 0);
    assert_eq!(report.edit_distance, 0);
    assert_eq!(report.percent_identity, 100.0);
}

#[test]
fn single_substitution_is_one_mismatch() {
    let seq1 = random_sequence(11, 120);
    let mut seq2 = seq1.clone();
    seq2[60] = substitute(seq2[60]);
    let report = semi_global_align(&seq1, &seq2, &params(12, 20, 0.1)).unwrap();
    assert_eq!(report.edit_script, "120M");
    assert_eq!(report.match_count, 119);
    assert_eq!(report.mismatch_count, 1);
    assert_eq!(report.mismatch_positions, vec![60]);
    assert_eq!(report.edit_distance, 1);
    assert!((report.percent_identity - 100.0 * 119.0 / 120.0).abs() < 1e-9);
}

#[test]
fn internal_insertion_is_reported() {
    let seq2 = random_sequence(23, 120);
    let filler = base_not_in(&[seq2[59], seq2[60]]);
    let mut seq1 = Vec::with_capacity(122);
    seq1.extend_from_slice(&seq2[..60]);
    seq1.push(filler);
    seq1.push(filler);
    seq1.extend_from_slice(&seq2[60..]);

    let report = semi_global_align(&seq1, &seq2, &params(12, 20, 0.1)).unwrap();
    assert!(
        report.edit_script.contains("2I"),
        "script: {}",
        report.edit_script
    );
    assert_eq!(report.insertion_count, 2);
    assert_eq!(report.insertion_positions.len(), 2);
    assert_eq!(report.insertion_positions[0], report.insertion_positions[1]);
    assert_eq!(report.match_count, 120);
    assert_eq!(report.edit_distance, 2);
    assert_eq!((report.s1_start, report.s1_end), (0, 122));
    assert_eq!((report.s2_start, report.s2_end), (0, 120));
}

#[test]
fn internal_deletion_is_reported() {
    let seq1 = random_sequence(29, 118);
    let filler = base_not_in(&[seq1[59], seq1[60]]);
    let mut seq2 = Vec::with_capacity(120);
    seq2.extend_from_slice(&seq1[..60]);
    seq2.push(filler);
    seq2.push(filler);
    seq2.extend_from_slice(&seq1[60..]);

    let report = semi_global_align(&seq1, &seq2, &params(12, 20, 0.1)).unwrap();
    assert!(
        report.edit_script.contains("2D"),
        "script: {}",
        report.edit_script
    );
    assert_eq!(report.deletion_count, 2);
    assert_eq!(report.deletion_positions.len(), 2);
    assert_eq!(
        report.deletion_positions[1],
        report.deletion_positions[0] + 1
    );
    assert_eq!(report.match_count, 118);
    assert_eq!(report.edit_distance, 2);
    assert_eq!((report.s1_start, report.s1_end), (0, 118));
    assert_eq!((report.s2_start, report.s2_end), (0, 120));
}

#[test]
fn zero_discrepancy_rejects_a_single_extra_base() {
    let seq2 = random_sequence(31, 120);
    let filler = base_not_in(&[seq2[59], seq2[60]]);
    let mut seq1 = seq2.clone();
    seq1.insert(60, filler);

    assert!(semi_global_align(&seq1, &seq2, &params(12, 20, 0.0)).is_none());
    // The same pair aligns once a small discrepancy is allowed.
    assert!(semi_global_align(&seq1, &seq2, &params(12, 20, 0.1)).is_some());
}

#[test]
fn sequences_sharing_no_kmers_give_none() {
    let report = semi_global_align(
        b"ACGTACGTACGTACGT",
        b"GGGGGGGGGGGGGGGG",
        &params(4, 10, 0.1),
    );
    assert!(report.is_none());
}

#[test]
fn identical_inputs_give_identical_reports_modulo_timing() {
    let seq1 = random_sequence(47, 200);
    let mut seq2 = seq1.clone();
    seq2[50] = substitute(seq2[50]);
    seq2[150] = substitute(seq2[150]);
    let p = params(12, 20, 0.1);

    let mut first = semi_global_align(&seq1, &seq2, &p).unwrap();
    let mut second = semi_global_align(&seq1, &seq2, &p).unwrap();
    first.elapsed_ms = 0;
    second.elapsed_ms = 0;
    assert_eq!(first, second);
}

#[test]
fn count_identities_hold_on_a_messy_pair() {
    let seq2 = random_sequence(59, 150);
    let mut seq1 = seq2.clone();
    seq1[40] = substitute(seq1[40]);
    let filler = base_not_in(&[seq2[99], seq2[100]]);
    seq1.insert(100, filler);

    let report = semi_global_align(&seq1, &seq2, &params(12, 25, 0.1)).unwrap();
    assert_eq!(
        report.aligned_length,
        report.match_count + report.mismatch_count + report.insertion_count + report.deletion_count
    );
    assert_eq!(
        report.edit_distance,
        report.mismatch_count + report.insertion_count + report.deletion_count
    );
    assert!(report.percent_identity > 0.0 && report.percent_identity <= 100.0);
    assert!(report.mismatch_count >= 1);
    assert!(report.insertion_count >= 1);
}

#[test]
fn report_round_trips_through_the_record_format() {
    let seq = random_sequence(3, 100);
    let report = semi_global_align(&seq, &seq, &params(10, 15, 0.1)).unwrap();
    let parsed = AlignmentReport::from_record(&report.to_record()).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn final_kmer_flag_controls_short_pair_alignment() {
    // A pair exactly k long shares no windows under the default bound.
    let p = params(8, 10, 0.1);
    assert!(semi_global_align(b"ACGTTGCA", b"ACGTTGCA", &p).is_none());

    let mut with_final = p.clone();
    with_final.seed.include_final_kmer = true;
    let report = semi_global_align(b"ACGTTGCA", b"ACGTTGCA", &with_final).unwrap();
    assert_eq!(report.edit_script, "8M");
    assert_eq!(report.match_count, 8);
}
