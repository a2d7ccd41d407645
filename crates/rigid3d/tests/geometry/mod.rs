mod bvh_brute_force;
mod elastic_exchange;
mod hull_contact;
mod hull_file;
mod point_containment;
mod resting_contact;
mod verlet_integration;
mod world_pairs;
