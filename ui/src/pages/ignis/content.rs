//! Static content of the Qiskit Ignis page.

use dioxus::prelude::*;

use crate::tracking::TrackEvent;

pub const REPOSITORY_URL: &str = "https://github.com/Qiskit/qiskit-ignis";

pub const IGNIS_LOGO: Asset = asset!("/assets/images/qiskit-ignis-logo.svg");

pub const GITHUB_EVENT: TrackEvent = TrackEvent {
    action: "Qiskit Ignis: GitHub Repository",
    object_type: "Button",
};

pub const COPY_EVENT: TrackEvent = TrackEvent {
    action: "Qiskit Ignis: Copy Code Sample",
    object_type: "Button",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMarker {
    Plain,
    /// Round marker, used for the final stage of the stack.
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub marker: StackMarker,
}

impl StackEntry {
    const fn plain(title: &'static str, subtitle: &'static str) -> Self {
        Self {
            title,
            subtitle,
            marker: StackMarker::Plain,
        }
    }
}

pub static STACK: [StackEntry; 4] = [
    StackEntry::plain(
        "Qiskit Ignis Experiments",
        "List of Quantum Circuits or Pulse Schedules",
    ),
    StackEntry::plain("Qiskit Terra", "Compile Circuits or Schedules"),
    StackEntry::plain("Providers", "Qiskit Aer, IBM Q, Third Party"),
    StackEntry {
        title: "Fitter/Filter",
        subtitle: "Fit to a Model/Plot Results",
        marker: StackMarker::Dot,
    },
];

pub const CODE_SAMPLE_LANGUAGE: &str = "python";

pub const CODE_SAMPLE: &str = r#"import qiskit
from qiskit.providers.aer.noise import NoiseModel
from qiskit.providers.aer.noise.errors.standard_errors import depolarizing_error

# Import the RB Functions
from qiskit.ignis.verification.randomized_benchmarking import randomized_benchmarking_seq, RBFitter

# Generate RB circuits (2Q RB)
rb_opts = {}
rb_opts['length_vector'] = [1, 10, 20, 50, 75, 100, 125]
rb_opts['nseeds'] = 5
rb_opts['rb_pattern'] = [[0, 1]]
rb_circs, xdata = randomized_benchmarking_seq(**rb_opts)

# Run on a noisy simulator
noise_model = NoiseModel()
noise_model.add_all_qubit_quantum_error(depolarizing_error(0.002, 1), ['u1', 'u2', 'u3'])
noise_model.add_all_qubit_quantum_error(depolarizing_error(0.002, 2), 'cx')

backend = qiskit.Aer.get_backend('qasm_simulator')

# Create the RB fitter
rb_fit = RBFitter(None, xdata, rb_opts['rb_pattern'])
for rb_seed,rb_circ_seed in enumerate(rb_circs):

    job = qiskit.execute(rb_circ_seed, backend=backend,
         basis_gates=['u1','u2','u3','cx'],
         noise_model=noise_model)

    # Add data to the fitter
    rb_fit.add_data(job.result())
    print('After seed %d, EPC %f'%(rb_seed,rb_fit.fit[0]['epc']))"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::dedent;

    #[test]
    fn stack_has_four_entries_in_order() {
        let titles: Vec<_> = STACK.iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            [
                "Qiskit Ignis Experiments",
                "Qiskit Terra",
                "Providers",
                "Fitter/Filter"
            ]
        );
    }

    #[test]
    fn only_last_entry_is_marked() {
        let marked: Vec<_> = STACK
            .iter()
            .enumerate()
            .filter(|(_, e)| e.marker == StackMarker::Dot)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marked, [STACK.len() - 1]);
    }

    #[test]
    fn code_sample_is_already_dedented() {
        assert_eq!(dedent(CODE_SAMPLE), CODE_SAMPLE);
    }

    #[test]
    fn events_use_button_object_type() {
        assert_eq!(GITHUB_EVENT.object_type, "Button");
        assert_eq!(COPY_EVENT.object_type, "Button");
        assert_ne!(GITHUB_EVENT.action, COPY_EVENT.action);
    }
}
